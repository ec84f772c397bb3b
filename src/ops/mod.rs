mod readme;
mod transaction;
mod version;
mod walk;

pub use readme::splice_lines;
pub use transaction::{Operation, Transaction};
pub use version::bump_package_version;
pub use walk::find_manifests;

pub mod bump;
pub mod readme;
pub mod show;

pub mod comments;
pub mod error;
pub mod filesystem;
pub mod visitor;

pub use comments::*;
pub use error::*;
pub use filesystem::*;
pub use visitor::*;

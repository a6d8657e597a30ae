mod constant;
pub mod error;
mod evaluator;
mod parser;
pub mod roll;
pub mod roller;
pub mod spec;
pub mod validate;

pub use error::Error;
pub use roll::RollResult;
pub use roll::Source;
pub use spec::RollSpec;

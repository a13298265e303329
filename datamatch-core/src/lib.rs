pub mod domain;
pub mod error;
pub mod matching;

pub use domain::*;
pub use error::*;
pub use matching::*;

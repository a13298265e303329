pub mod dataset;
pub mod run;

pub use dataset::*;
pub use run::*;

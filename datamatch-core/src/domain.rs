pub mod dataset;
pub mod ids;
pub mod run;

pub use dataset::*;
pub use ids::*;
pub use run::*;

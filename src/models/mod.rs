mod analysis;
mod content;
mod filter;
mod stats;
mod trends;

pub use analysis::*;
pub use content::*;
pub use filter::*;
pub use stats::*;
pub use trends::*;

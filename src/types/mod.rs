pub mod entry;
pub mod metrics;
pub mod standard;

pub use entry::*;
pub use metrics::*;
pub use standard::*;

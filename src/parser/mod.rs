pub mod line;
pub mod log_file;

pub use line::*;
pub use log_file::*;

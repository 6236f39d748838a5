mod error;
mod podlog;
pub mod types;
pub mod utils;

pub use error::Error;
pub use podlog::{Output, PodLogs};

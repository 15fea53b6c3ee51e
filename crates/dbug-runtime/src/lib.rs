pub mod access;
pub mod buffer;
pub mod config;
pub mod context;
pub mod dock;
pub mod error;
pub mod inject;

pub use access::{AccessRule, RequestInfo};
pub use buffer::DumpBuffer;
pub use config::{Config, DumpDefaults};
pub use context::{FinishedResponse, RequestContext};
pub use error::{Error, Result};

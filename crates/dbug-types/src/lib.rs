pub mod error;
pub mod kind;
pub mod options;
pub mod value;
mod convert;

pub use error::{Error, Result};
pub use kind::ValueKind;
pub use options::{DEFAULT_MAX_DEPTH, DumpOptions, ForcedKind};
pub use value::{Composite, CompositeRef, Key, NodeId, Record, RecordRef, Resource, Value};

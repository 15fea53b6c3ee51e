// Engine module - turns a Value into one self-contained dump fragment.
// The output is markup only; buffering and the dock live in dbug-runtime.

pub mod markup;
pub mod xml;
mod ancestors;
mod render;

pub use render::Renderer;

use dbug_types::{DumpOptions, Value};

/// Render one dump fragment.
///
/// Never fails: malformed XML, cycles and excessive depth all become inline
/// notices inside the fragment.
pub fn render(value: &Value, options: &DumpOptions) -> String {
    Renderer::new(options).render(value)
}

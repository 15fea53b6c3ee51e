//! Dock pages for widget tests, produced by the real render and inject path.

use dbug_dock::{FileStore, MemoryStore, Page, Widget};
use dbug_runtime::{Config, RequestContext, RequestInfo};
use dbug_types::{DumpOptions, Value};
use tempfile::TempDir;

pub const HOST_PAGE: &str =
    "<!doctype html><html><head><title>app</title></head><body><main>app</main></body></html>";

pub const VIEWPORT: f64 = 1000.0;

/// Host page with one dock holding a dump per value.
pub fn page_with_dumps(values: Vec<Value>) -> String {
    let mut ctx = RequestContext::new(Config {
        only_debug: false,
        ..Config::default()
    });
    for (seq, value) in values.into_iter().enumerate() {
        ctx.dump(value, &DumpOptions::new().sequence(seq as i64));
    }
    ctx.finish(HOST_PAGE, &RequestInfo::default()).body
}

/// Bare dock markup, as a late-inserted fragment.
pub fn dock_fragment(values: Vec<Value>) -> String {
    let dumps: Vec<String> = values.iter().map(dump_fragment).collect();
    dbug_runtime::dock::render_dock(&dumps.join("\n"))
}

pub fn dump_fragment(value: &Value) -> String {
    dbug_engine::render(value, &DumpOptions::new())
}

/// Parse `html` and boot a widget over it.
pub fn boot(html: &str, store: MemoryStore) -> (Page, Widget<MemoryStore>) {
    let mut page = Page::parse(html).with_viewport(VIEWPORT);
    let mut widget = Widget::new(store);
    widget.boot(&mut page);
    (page, widget)
}

/// File-backed store in a fresh temp dir. Keep the dir alive while the store
/// is in use.
pub fn temp_file_store() -> std::io::Result<(TempDir, FileStore)> {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path().join("dock-state.json"));
    Ok((dir, store))
}

use crate::access::{self, RequestInfo};
use crate::buffer::DumpBuffer;
use crate::config::Config;
use crate::{dock, inject};
use dbug_types::{DumpOptions, Value};

/// Everything dbug keeps for one request.
///
/// Create one when the request starts, pass it to the call sites that dump,
/// and call [`RequestContext::finish`] once with the rendered body. Each
/// request owns its own context, so concurrent requests never share a buffer.
#[derive(Debug, Default)]
pub struct RequestContext {
    config: Config,
    buffer: DumpBuffer,
}

/// Outcome of [`RequestContext::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedResponse {
    pub body: String,
    /// The host should ship the widget's script and stylesheet.
    pub assets_required: bool,
    /// The dock was spliced into `body`.
    pub injected: bool,
}

impl RequestContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            buffer: DumpBuffer::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Options seeded from the configured defaults.
    pub fn options(&self) -> DumpOptions {
        self.config.dump_options()
    }

    /// Render for the caller to place. Nothing is buffered, but the request
    /// still counts as used so the page gets the dock assets.
    pub fn render(&mut self, value: &Value, options: &DumpOptions) -> String {
        self.buffer.mark_used();
        dbug_engine::render(value, options)
    }

    /// Render and buffer for the dock.
    pub fn dump(&mut self, value: impl Into<Value>, options: &DumpOptions) {
        let html = dbug_engine::render(&value.into(), options);
        self.buffer.append(html);
    }

    /// Dump with the classic positional arguments. Line breaks and tabs in
    /// text values are shown as their escape sequences.
    pub fn dump_legacy(
        &mut self,
        value: impl Into<Value>,
        sequence: i64,
        title: &str,
        collapsed: bool,
    ) {
        let value = match value.into() {
            Value::Text(text) => Value::Text(visible_whitespace(&text)),
            other => other,
        };
        let options = self
            .options()
            .sequence(sequence)
            .title(title)
            .collapsed(collapsed);
        self.dump(value, &options);
    }

    pub fn append(&mut self, fragment: String) {
        self.buffer.append(fragment);
    }

    pub fn was_used(&self) -> bool {
        self.buffer.was_used()
    }

    pub fn flush_all(&mut self) -> String {
        self.buffer.flush_all()
    }

    pub fn buffer(&self) -> &DumpBuffer {
        &self.buffer
    }

    /// Whether the host should enqueue the widget assets for this response.
    pub fn assets_required(&self, request: &RequestInfo) -> bool {
        request.html && self.was_used() && access::is_allowed(&self.config, request)
    }

    /// Drain the buffer into the dock and splice it into `body`.
    ///
    /// The body is returned untouched when the response is not HTML, access
    /// is denied, or there is nothing to show.
    pub fn finish(&mut self, body: &str, request: &RequestInfo) -> FinishedResponse {
        let untouched = |assets_required| FinishedResponse {
            body: body.to_string(),
            assets_required,
            injected: false,
        };

        if !self.assets_required(request) {
            tracing::debug!(
                html = request.html,
                used = self.was_used(),
                "dock not injected"
            );
            return untouched(false);
        }

        let dumps = self.flush_all();
        if dumps.is_empty() {
            return untouched(true);
        }

        FinishedResponse {
            body: inject::splice(body, &dock::render_dock(&dumps)),
            assets_required: true,
            injected: true,
        }
    }
}

fn visible_whitespace(text: &str) -> String {
    text.replace("\r\n", "\\r\\n")
        .replace('\r', "\\r")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}

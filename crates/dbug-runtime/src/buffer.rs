/// Ordered dump fragments of one request.
///
/// `used` records that something was dumped at all and stays set after the
/// buffer is drained.
#[derive(Debug, Default)]
pub struct DumpBuffer {
    fragments: Vec<String>,
    used: bool,
}

impl DumpBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, fragment: String) {
        self.fragments.push(fragment);
        self.used = true;
    }

    /// Record use without buffering a fragment.
    pub fn mark_used(&mut self) {
        self.used = true;
    }

    pub fn was_used(&self) -> bool {
        self.used
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Drain all fragments, in append order, joined by a line break.
    pub fn flush_all(&mut self) -> String {
        if self.fragments.is_empty() {
            return String::new();
        }

        let out = self.fragments.join("\n");
        self.fragments.clear();
        tracing::debug!(bytes = out.len(), "dump buffer flushed");
        out
    }
}

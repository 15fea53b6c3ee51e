use dbug_types::{CompositeRef, DumpOptions, ForcedKind, RecordRef, Value};

use crate::ancestors::Ancestors;
use crate::markup;
use crate::xml;

/// Recursive renderer bound to the options of one dump call.
///
/// Holds no traversal state of its own: the ancestor chain used for cycle
/// detection lives on the call stack, so two renders never share it.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'o> {
    options: &'o DumpOptions,
}

impl<'o> Renderer<'o> {
    pub fn new(options: &'o DumpOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, value: &Value) -> String {
        let root = Ancestors::Root;

        match self.options.forced_kind {
            ForcedKind::Xml => self.wrap("xml", "xml", &xml::render_xml(value)),
            ForcedKind::Array => {
                let content = self.composite(&value.to_composite(), 0, &root);
                self.wrap("array", "array", &content)
            }
            ForcedKind::Object => {
                let content = self.record(&value.to_record(), 0, &root);
                self.wrap("object", "object", &content)
            }
            ForcedKind::Auto => {
                let content = self.value(value, 0, &root);
                self.wrap("mixed", value.kind().label(), &content)
            }
        }
    }

    fn wrap(&self, kind: &str, label: &str, content_html: &str) -> String {
        markup::dump_block(kind, &self.title(label), !self.options.collapsed, content_html)
    }

    fn title(&self, label: &str) -> String {
        let mut title = format!("{}: {}", label, self.options.sequence);
        if let Some(extra) = self.options.title.as_deref().filter(|t| !t.is_empty()) {
            title.push_str(" \u{2014} ");
            title.push_str(extra);
        }
        title
    }

    /// Nested blocks start open only at the top and only when not collapsed.
    fn starts_open(&self, depth: usize) -> bool {
        depth == 0 && !self.options.collapsed
    }

    fn value(&self, value: &Value, depth: usize, ancestors: &Ancestors<'_>) -> String {
        if depth >= self.options.depth_limit() {
            tracing::debug!(depth, "max depth reached");
            return markup::notice("Max depth reached");
        }

        match value {
            Value::Composite(composite) => self.composite(composite, depth, ancestors),
            Value::Structured(record) => self.record(record, depth, ancestors),
            Value::Resource(resource) => markup::pre(&format!("[resource: {}]", resource.kind)),
            Value::Null => markup::pre("NULL"),
            Value::Bool(true) => markup::pre("TRUE"),
            Value::Bool(false) => markup::pre("FALSE"),
            Value::Text(text) if text.is_empty() => markup::pre("[empty string]"),
            Value::Text(text) => markup::pre(text),
            Value::Int(int) => markup::pre(&int.to_string()),
            Value::Float(float) => markup::pre(&format_float(*float)),
        }
    }

    fn composite(&self, composite: &CompositeRef, depth: usize, ancestors: &Ancestors<'_>) -> String {
        let id = composite.id();
        if ancestors.contains(id) {
            tracing::debug!(depth, "recursive array");
            return markup::notice("*RECURSION* (array)");
        }
        let inner = ancestors.with(id);

        let entries = composite.entries();
        let rows: Vec<String> = entries
            .iter()
            .map(|(key, value)| markup::row(&key.to_string(), &self.value(value, depth + 1, &inner)))
            .collect();

        markup::array_item(entries.len(), self.starts_open(depth), &rows.join("\n"))
    }

    fn record(&self, record: &RecordRef, depth: usize, ancestors: &Ancestors<'_>) -> String {
        let class = record.class();
        let id = record.id();
        if ancestors.contains(id) {
            tracing::debug!(depth, class = %class, "recursive object");
            return markup::notice(&format!("*RECURSION* (object: {})", class));
        }
        let inner = ancestors.with(id);

        let properties: Vec<String> = record
            .fields()
            .iter()
            .map(|(name, value)| markup::row(name, &self.value(value, depth + 1, &inner)))
            .collect();

        let methods: Vec<String> = record
            .sorted_methods()
            .iter()
            .map(|name| markup::row(name, &markup::notice("[function]")))
            .collect();

        markup::object_item(
            &class,
            self.starts_open(depth),
            &properties.join("\n"),
            &methods.join("\n"),
        )
    }
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        let scientific = format!("{:e}", value);
        match scientific.split_once('e') {
            Some((mantissa, exponent)) => match exponent.parse::<i32>() {
                Ok(exponent) if !(-4..15).contains(&exponent) => {
                    let fraction = if mantissa.contains('.') { "" } else { ".0" };
                    let sign = if exponent < 0 { '-' } else { '+' };
                    format!("{}{}E{}{}", mantissa, fraction, sign, exponent.unsigned_abs())
                }
                _ => value.to_string(),
            },
            None => value.to_string(),
        }
    }
}

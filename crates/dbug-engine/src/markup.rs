//! Markup builders for the dump contract.
//!
//! Every builder returns a complete, balanced element so fragments can be
//! concatenated in any order. Text arguments are escaped here; arguments named
//! `*_html` are already markup and are inserted verbatim.

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

fn open_attr(open: bool) -> &'static str {
    if open { " open" } else { "" }
}

/// Preformatted scalar text.
pub fn pre(text: &str) -> String {
    format!("<pre class=\"dbug-pre\">{}</pre>", escape(text))
}

/// Inline notice (recursion, depth, errors).
pub fn notice(text: &str) -> String {
    format!("<div class=\"dbug-note\">{}</div>", escape(text))
}

/// One key/value line of a grid.
pub fn row(key: &str, value_html: &str) -> String {
    format!(
        "<div class=\"dbug-row\">\n<div class=\"dbug-key\">{}</div>\n<div class=\"dbug-val\">{}</div>\n</div>",
        escape(key),
        value_html
    )
}

fn grid(rows_html: &str) -> String {
    format!("<div class=\"dbug-grid\">\n{}\n</div>", rows_html)
}

/// Expandable composite block.
pub fn array_item(count: usize, open: bool, rows_html: &str) -> String {
    format!(
        "<details class=\"dbug-item\"{open}>\n\
         <summary class=\"dbug-item-summary\"><span class=\"dbug-pill\">array</span><span class=\"dbug-muted\">{count} item(s)</span></summary>\n\
         <div class=\"dbug-item-body\">\n{grid}\n</div>\n\
         </details>",
        open = open_attr(open),
        count = count,
        grid = grid(rows_html),
    )
}

/// Expandable structured block with its Properties and Methods sections.
pub fn object_item(class: &str, open: bool, properties_html: &str, methods_html: &str) -> String {
    format!(
        "<details class=\"dbug-item\"{open}>\n\
         <summary class=\"dbug-item-summary\"><span class=\"dbug-pill\">object</span><span class=\"dbug-muted\">{class}</span></summary>\n\
         <div class=\"dbug-item-body\">\n\
         <div class=\"dbug-subtitle\">Properties</div>\n{properties}\n\
         <div class=\"dbug-subtitle\">Methods</div>\n{methods}\n\
         </div>\n\
         </details>",
        open = open_attr(open),
        class = escape(class),
        properties = grid(properties_html),
        methods = grid(methods_html),
    )
}

/// Outer block of one dump.
pub fn dump_block(kind: &str, title: &str, open: bool, content_html: &str) -> String {
    format!(
        "<details class=\"dbug-block\"{open} data-kind=\"{kind}\">\n\
         <summary class=\"dbug-summary\"><span class=\"dbug-badge\">dBug</span><span class=\"dbug-title\">{title}</span></summary>\n\
         <div class=\"dbug-body-inner\">\n{content}\n</div>\n\
         </details>",
        open = open_attr(open),
        kind = escape(kind),
        title = escape(title),
        content = content_html,
    )
}

//! Structural assertions over rendered markup.
//!
//! The renderer only ever emits its own fixed tags, so counting tag
//! occurrences is enough to reason about nesting and balance.

use anyhow::Result;

/// Number of non-overlapping occurrences of `needle`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Deepest nesting of `<details>` elements.
pub fn details_depth(html: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut rest = html;

    while let Some(pos) = rest.find("details") {
        let before = &rest[..pos];
        if before.ends_with("</") {
            depth = depth.saturating_sub(1);
        } else if before.ends_with('<') {
            depth += 1;
            deepest = deepest.max(depth);
        }
        rest = &rest[pos + "details".len()..];
    }

    deepest
}

/// Every element the renderer opens is closed again.
pub fn assert_balanced(html: &str) -> Result<()> {
    for tag in ["details", "summary", "div", "span", "pre"] {
        let opened = count(html, &format!("<{} ", tag)) + count(html, &format!("<{}>", tag));
        let closed = count(html, &format!("</{}>", tag));
        if opened != closed {
            anyhow::bail!("<{}> opened {} times but closed {} times", tag, opened, closed);
        }
    }
    Ok(())
}

/// None of the raw characters appear outside the renderer's own tags.
///
/// Strips every tag the renderer emits and checks that what remains has no
/// `<`, `>` or `"` left.
pub fn assert_no_raw_markup(html: &str) -> Result<()> {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' if !in_tag => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    for raw in ['<', '>', '"'] {
        if text.contains(raw) {
            anyhow::bail!("unescaped {:?} in text content", raw);
        }
    }
    Ok(())
}

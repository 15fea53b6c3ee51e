/// Insert `dock` before every `</body>` (any letter case), or append it when
/// the document has no closing body tag.
pub fn splice(body: &str, dock: &str) -> String {
    const CLOSE: &str = "</body>";

    // ASCII lowercasing keeps byte offsets aligned with `body`.
    let lowered = body.to_ascii_lowercase();
    if !lowered.contains(CLOSE) {
        tracing::debug!("no closing body tag, appending dock");
        return format!("{}{}", body, dock);
    }

    let mut out = String::with_capacity(body.len() + dock.len() + 1);
    let mut last = 0;
    for (start, _) in lowered.match_indices(CLOSE) {
        out.push_str(&body[last..start]);
        out.push_str(dock);
        out.push('\n');
        out.push_str(CLOSE);
        last = start + CLOSE.len();
    }
    out.push_str(&body[last..]);
    out
}

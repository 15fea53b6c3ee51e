//! Tag scanner for dock discovery.
//!
//! This is not an HTML parser. It yields start and end tags with their
//! attributes and skips comments, doctypes, processing instructions and
//! the bodies of `script`/`style`. Text content is dropped. Attribute values
//! are kept raw (entities are not decoded).

const RAW_TEXT: [&str; 2] = ["script", "style"];

const VOID: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Open {
        name: String,
        attrs: Vec<Attr>,
        self_closing: bool,
    },
    Close {
        name: String,
    },
}

impl Tag {
    pub fn name(&self) -> &str {
        match self {
            Tag::Open { name, .. } | Tag::Close { name } => name,
        }
    }

    /// Attribute value; valueless attributes read as `""`.
    pub fn attr(&self, wanted: &str) -> Option<&str> {
        match self {
            Tag::Open { attrs, .. } => attrs
                .iter()
                .find(|a| a.name == wanted)
                .map(|a| a.value.as_deref().unwrap_or("")),
            Tag::Close { .. } => None,
        }
    }

    pub fn has_attr(&self, wanted: &str) -> bool {
        self.attr(wanted).is_some()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Whether this opens an element that will see a matching close tag.
    pub fn opens_element(&self) -> bool {
        match self {
            Tag::Open {
                name, self_closing, ..
            } => !self_closing && !VOID.contains(&name.as_str()),
            Tag::Close { .. } => false,
        }
    }
}

pub fn scan(html: &str) -> Vec<Tag> {
    let mut tags = Vec::new();
    let mut pos = 0;

    while let Some(offset) = html[pos..].find('<') {
        let start = pos + offset;
        let rest = &html[start..];

        if rest.starts_with("<!--") {
            pos = rest.find("-->").map_or(html.len(), |end| start + end + 3);
            continue;
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            pos = skip_past_gt(html, start);
            continue;
        }
        if let Some(after) = rest.strip_prefix("</") {
            let end = after.find('>').unwrap_or(after.len());
            let name = after[..end].trim().to_ascii_lowercase();
            if !name.is_empty() {
                tags.push(Tag::Close { name });
            }
            pos = (start + 2 + end + 1).min(html.len());
            continue;
        }
        if !rest[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            pos = start + 1;
            continue;
        }

        let (tag, end) = parse_open(html, start + 1);
        pos = end;
        if let Tag::Open {
            name,
            self_closing: false,
            ..
        } = &tag
            && RAW_TEXT.contains(&name.as_str())
        {
            pos = find_raw_text_end(html, pos, name);
        }
        tags.push(tag);
    }

    tags
}

fn skip_past_gt(html: &str, from: usize) -> usize {
    html[from..].find('>').map_or(html.len(), |end| from + end + 1)
}

fn find_raw_text_end(html: &str, from: usize, name: &str) -> usize {
    let needle = format!("</{}", name);
    html[from..]
        .to_ascii_lowercase()
        .find(&needle)
        .map_or(html.len(), |end| from + end)
}

/// Parse from just after `<`. Returns the tag and the offset past `>`.
fn parse_open(html: &str, from: usize) -> (Tag, usize) {
    let bytes = html.as_bytes();
    let mut i = from;

    while i < bytes.len() && !is_space(bytes[i]) && bytes[i] != b'>' && bytes[i] != b'/' {
        i += 1;
    }
    let name = html[from..i].to_ascii_lowercase();
    let mut attrs = Vec::new();
    let mut self_closing = false;

    loop {
        while i < bytes.len() && is_space(bytes[i]) {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }
        match bytes[i] {
            b'>' => {
                i += 1;
                break;
            }
            b'/' => {
                i += 1;
                if bytes.get(i) == Some(&b'>') {
                    self_closing = true;
                }
                continue;
            }
            _ => {}
        }

        let name_start = i;
        while i < bytes.len()
            && !is_space(bytes[i])
            && !matches!(bytes[i], b'=' | b'>' | b'/')
        {
            i += 1;
        }
        let attr_name = html[name_start..i].to_ascii_lowercase();

        while i < bytes.len() && is_space(bytes[i]) {
            i += 1;
        }
        let mut value = None;
        if bytes.get(i) == Some(&b'=') {
            i += 1;
            while i < bytes.len() && is_space(bytes[i]) {
                i += 1;
            }
            match bytes.get(i) {
                Some(&quote @ (b'"' | b'\'')) => {
                    let value_start = i + 1;
                    let end = html[value_start..]
                        .find(quote as char)
                        .map_or(html.len(), |end| value_start + end);
                    value = Some(html[value_start..end].to_string());
                    i = (end + 1).min(html.len());
                }
                _ => {
                    let value_start = i;
                    while i < bytes.len() && !is_space(bytes[i]) && bytes[i] != b'>' {
                        i += 1;
                    }
                    value = Some(html[value_start..i].to_string());
                }
            }
        }

        attrs.push(Attr {
            name: attr_name,
            value,
        });
    }

    (
        Tag::Open {
            name,
            attrs,
            self_closing,
        },
        i,
    )
}

fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}

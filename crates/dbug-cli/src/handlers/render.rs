use anyhow::{Context, Result};
use dbug_runtime::{Config, RequestContext, dock, inject};
use dbug_types::{DumpOptions, ForcedKind, Value};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

const PAGE: &str = "<!doctype html>
<html>
<head>
<meta charset=\"utf-8\">
<title>dBug</title>
</head>
<body>
</body>
</html>
";

pub fn handle(
    files: &[PathBuf],
    options: DumpOptions,
    config: Config,
    fragment: bool,
) -> Result<()> {
    let inputs = read_inputs(files, options.forced_kind)?;
    let html = render(inputs, &options, config, fragment);

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    if !html.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

/// Dump every input in order. Sequence labels count up from the one in
/// `options`.
fn render(inputs: Vec<Value>, options: &DumpOptions, config: Config, fragment: bool) -> String {
    let mut ctx = RequestContext::new(config);
    for (offset, value) in inputs.into_iter().enumerate() {
        let options = options
            .clone()
            .sequence(options.sequence.saturating_add(offset as i64));
        ctx.dump(value, &options);
    }

    let dumps = ctx.flush_all();
    tracing::debug!(bytes = dumps.len(), fragment, "rendered dumps");
    if fragment {
        dumps
    } else {
        inject::splice(PAGE, &dock::render_dock(&dumps))
    }
}

fn read_inputs(files: &[PathBuf], kind: ForcedKind) -> Result<Vec<Value>> {
    if files.is_empty() {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(vec![parse_input(content, kind)]);
    }

    files.iter().map(|path| read_file(path, kind)).collect()
}

fn read_file(path: &Path, kind: ForcedKind) -> Result<Value> {
    // XML takes the path; the renderer loads the file itself
    if kind == ForcedKind::Xml {
        if !path.is_file() {
            anyhow::bail!("File not found: {}", path.display());
        }
        return Ok(Value::text(path.to_string_lossy()));
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(parse_input(content, kind))
}

/// JSON when it parses, text otherwise.
fn parse_input(content: String, kind: ForcedKind) -> Value {
    if kind == ForcedKind::Xml {
        return Value::Text(content);
    }
    match Value::from_json_str(&content) {
        Ok(value) => value,
        Err(err) => {
            tracing::trace!(error = %err, "input is not JSON, dumping as text");
            Value::Text(content)
        }
    }
}

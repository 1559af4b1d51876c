use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::Error;

/// Known name-to-value pairs before any interactive gap-filling. Values are raw bytes
/// so they reach the output exactly as written in the file.
pub type Properties = HashMap<String, Vec<u8>>;

/// Read and parse a `key = value` properties file.
pub fn load_properties(path: impl AsRef<Path>) -> Result<Properties, Error> {
    let path = path.as_ref();
    let text = fs::read(path).map_err(|e| Error::io(path, e))?;
    let props = parse_properties(&text)?;
    debug!(path = %path.display(), count = props.len(), "loaded properties");
    Ok(props)
}

/// Parse properties text.
///
/// Blank lines and lines whose first non-blank character is `#` are skipped. Every
/// other line is split on its first `=`, with key and value trimmed. A line without
/// `=` rejects the whole input.
pub fn parse_properties(text: impl AsRef<[u8]>) -> Result<Properties, Error> {
    let mut props = Properties::new();

    for (idx, line) in text.as_ref().split(|&b| b == b'\n').enumerate() {
        let raw = line.strip_suffix(b"\r").unwrap_or(line);
        let trimmed = raw.trim_ascii();
        if trimmed.is_empty() || trimmed[0] == b'#' {
            continue;
        }

        let Some(eq) = memchr::memchr(b'=', raw) else {
            return Err(Error::Parse {
                line: idx + 1,
                text: String::from_utf8_lossy(raw).into_owned(),
            });
        };

        let key = String::from_utf8_lossy(raw[..eq].trim_ascii()).into_owned();
        trace!(line = idx + 1, key = %key, "property");
        props.insert(key, raw[eq + 1..].trim_ascii().to_vec());
    }

    Ok(props)
}

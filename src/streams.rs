use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::Error;

/// Read the whole template from `path`, or from standard input when `None`. The bytes
/// are returned as-is; no encoding is assumed.
pub fn read_template(path: Option<&Path>) -> Result<Vec<u8>, Error> {
    match path {
        Some(path) => fs::read(path).map_err(|e| Error::io(path, e)),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|e| Error::io("<stdin>", e))?;
            Ok(buffer)
        }
    }
}

/// Write `bytes` to `path` (created or truncated), or to standard output when `None`.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), Error> {
    match path {
        Some(path) => fs::write(path, bytes).map_err(|e| Error::io(path, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|()| stdout.flush())
                .map_err(|e| Error::io("<stdout>", e))
        }
    }
}

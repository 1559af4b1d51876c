use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::error::Error;
use crate::properties::Properties;

/// Source of operator-supplied values for placeholders the properties did not cover.
pub trait Prompt {
    /// Ask for `name`. `Ok(None)` means the operator's input is exhausted.
    fn ask(&mut self, name: &str) -> io::Result<Option<Vec<u8>>>;
}

/// Line-oriented prompt: writes `NAME: ` to `output`, reads one line from `input`.
#[derive(Debug)]
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn ask(&mut self, name: &str) -> io::Result<Option<Vec<u8>>> {
        write!(self.output, "{}: ", name)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Complete `properties` for `names`.
///
/// Names already present are kept. When `interactive` is set each missing name is asked
/// for in order; otherwise missing names stay absent and surface later as a
/// [`Error::MissingKey`] from rendering.
pub fn resolve(
    names: &[String],
    mut properties: Properties,
    interactive: bool,
    prompt: &mut dyn Prompt,
) -> Result<Properties, Error> {
    for name in names {
        if properties.contains_key(name) {
            continue;
        }
        if !interactive {
            debug!(name = %name, "no value for placeholder, leaving unresolved");
            continue;
        }

        let value = prompt
            .ask(name)
            .map_err(|e| Error::io("<terminal>", e))?
            .ok_or(Error::Aborted)?;
        trace!(name = %name, "value supplied interactively");
        properties.insert(name.clone(), value);
    }

    Ok(properties)
}

mod config;
mod context;
mod error;
mod properties;
mod renderer;
mod resolver;
pub mod scanner;
pub mod streams;

use tracing::{debug, warn};

pub use config::Config;
pub use context::ValueLookup;
pub use error::Error;
pub use properties::{load_properties, parse_properties, Properties};
pub use renderer::render;
pub use resolver::{resolve, Prompt, TerminalPrompt};

/// Result of one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `--list-params`: distinct placeholder names, sorted.
    Listing(Vec<String>),
    /// Fully substituted template bytes.
    Rendered(Vec<u8>),
}

/// Distinct placeholder names in `template`, sorted ascending.
pub fn list_placeholders<T: AsRef<[u8]> + ?Sized>(template: &T) -> Vec<String> {
    scanner::scan(template.as_ref())
}

/// Run the pipeline once over an already-read template.
///
/// In list mode only the scanner runs. Otherwise the properties file (if any) is
/// loaded, gaps are filled through `prompt` when `config.interactive` is set, and the
/// template is rendered. Nothing is produced unless every stage succeeds.
pub fn run(config: &Config, template: &[u8], prompt: &mut dyn Prompt) -> Result<Outcome, Error> {
    let names = list_placeholders(template);
    debug!(count = names.len(), "scanned placeholders");

    if config.list_params {
        return Ok(Outcome::Listing(names));
    }

    let properties = match &config.properties {
        Some(path) => load_properties(path)?,
        None => Properties::new(),
    };

    if config.interactive
        && config.input.is_none()
        && names.iter().any(|n| !properties.contains_key(n))
    {
        warn!("template was read from stdin; interactive prompts will see end of input");
    }

    let resolved = resolve(&names, properties, config.interactive, prompt)?;
    let rendered = render(template, &resolved)?;
    debug!(bytes = rendered.len(), "rendered template");

    Ok(Outcome::Rendered(rendered.into_owned()))
}

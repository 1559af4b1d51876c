use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for a single run, built once from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Only print the distinct placeholder names.
    pub list_params: bool,
    /// Template source; `None` reads standard input.
    pub input: Option<PathBuf>,
    /// Properties file; `None` starts from an empty mapping.
    pub properties: Option<PathBuf>,
    /// Prompt for placeholders the properties do not cover.
    pub interactive: bool,
    /// Output destination; `None` writes standard output.
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list_params(mut self, list_params: bool) -> Self {
        self.list_params = list_params;
        self
    }

    pub fn with_input(mut self, path: Option<PathBuf>) -> Self {
        self.input = non_empty(path);
        self
    }

    pub fn with_properties(mut self, path: Option<PathBuf>) -> Self {
        self.properties = non_empty(path);
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_output(mut self, path: Option<PathBuf>) -> Self {
        self.output = non_empty(path);
        self
    }
}

// An empty path on the command line means "unset".
fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

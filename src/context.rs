use std::collections::HashMap;

/// Name-to-value lookup consulted by the renderer.
pub trait ValueLookup {
    /// Value bytes for the placeholder `name`, if one is known.
    fn lookup(&self, name: &str) -> Option<&[u8]>;
}

impl ValueLookup for HashMap<String, Vec<u8>> {
    fn lookup(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(Vec::as_slice)
    }
}

impl ValueLookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(String::as_bytes)
    }
}

impl ValueLookup for HashMap<&str, &str> {
    fn lookup(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(|v| v.as_bytes())
    }
}

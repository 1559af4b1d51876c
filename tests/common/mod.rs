use std::collections::VecDeque;
use std::io;
use std::io::Write;

use tempfile::NamedTempFile;
use tplfill::Prompt;

#[allow(dead_code)]
pub fn write_temp(content: impl AsRef<[u8]>) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_ref()).expect("write temp file");
    file
}

/// Scripted operator: answers from a queue and records every name asked for.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Vec<u8>>,
    pub asked: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.as_bytes().to_vec()).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, name: &str) -> io::Result<Option<Vec<u8>>> {
        self.asked.push(name.to_string());
        Ok(self.answers.pop_front())
    }
}

use std::fmt;

/// Bounded text rendering of one uploaded file, ready to be inlined in a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFileContent(String);

impl NormalizedFileContent {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedFileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

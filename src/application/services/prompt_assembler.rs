use crate::domain::{BackendKind, NormalizedFileContent};

const LOCAL_SYSTEM_INSTRUCTION: &str = "You are a helpful AI assistant running on a local model. \
Answer clearly and accurately. When files are provided, base your answer on their contents, \
quote the relevant parts and say so plainly when the files do not contain the answer.";

const CLOUD_SYSTEM_INSTRUCTION: &str = "You are an expert assistant that analyzes documents and \
answers questions. Be precise and well structured. Use only the information in the provided \
files and message, and point out anything that is missing or ambiguous instead of guessing.";

const ANALYSIS_INSTRUCTION: &str = "Please provide a comprehensive analysis of the uploaded \
file(s), addressing the user's message if one was given.";

pub fn system_instruction(backend: BackendKind) -> &'static str {
    match backend {
        BackendKind::Local => LOCAL_SYSTEM_INSTRUCTION,
        BackendKind::Cloud => CLOUD_SYSTEM_INSTRUCTION,
    }
}

/// One normalized file, labelled with what the client declared about it.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptFile {
    pub name: String,
    pub mime_type: String,
    pub content: NormalizedFileContent,
}

/// Everything that goes into a single model prompt.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub system_instruction: &'static str,
    pub message: Option<String>,
    pub files: Vec<PromptFile>,
}

impl PromptRequest {
    pub fn new(backend: BackendKind, message: Option<String>, files: Vec<PromptFile>) -> Self {
        Self {
            system_instruction: system_instruction(backend),
            message,
            files,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.files.is_empty()
    }

    pub fn render(&self) -> String {
        let mut prompt = String::from(self.system_instruction);

        if let Some(message) = &self.message {
            prompt.push_str("\n\nUser message: ");
            prompt.push_str(message);
        }

        if !self.files.is_empty() {
            prompt.push_str(&format!(
                "\n\nThe user has uploaded {} file(s):",
                self.files.len()
            ));

            for (index, file) in self.files.iter().enumerate() {
                let declared = if file.mime_type.is_empty() {
                    "unknown type"
                } else {
                    file.mime_type.as_str()
                };
                prompt.push_str(&format!(
                    "\n\n--- File {}: {} ({}) ---\n{}",
                    index + 1,
                    file.name,
                    declared,
                    file.content
                ));
            }

            prompt.push_str("\n\n");
            prompt.push_str(ANALYSIS_INSTRUCTION);
        }

        prompt
    }
}

use crate::lang::Error;

/// What `compile` returns when a run printed nothing.
pub const NO_OUTPUT: &str = "No output generated.";

/// ## Output buffer
///
/// Append-only. Every fragment is newline terminated.

#[derive(Debug, Default)]
pub struct Output {
    text: String,
}

impl Output {
    pub fn new() -> Output {
        Output::default()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Empty content appends nothing, not even the newline.
    pub fn print(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.text.push_str(s);
        self.text.push('\n');
    }

    pub fn diagnostic(&mut self, error: &Error) {
        debug_assert!(error.is_diagnostic(), "fatal error written as output: {}", error);
        self.text.push_str(&format!("?{}\n", error));
    }

    /// Takes the accumulated text, or the sentinel when there is none.
    pub fn take(&mut self) -> String {
        if self.text.is_empty() {
            NO_OUTPUT.to_string()
        } else {
            std::mem::take(&mut self.text)
        }
    }
}

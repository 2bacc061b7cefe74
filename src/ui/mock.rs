//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined confirm responses.
//!
//! # Example
//!
//! ```
//! use kitbag::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting setup");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Starting setup".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::collections::HashMap;

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured confirm responses
/// keyed by a substring of the question.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    steps: Vec<(usize, usize, String)>,
    spinners: Vec<String>,
    confirms_shown: Vec<String>,
    confirm_responses: HashMap<String, bool>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `is_interactive` report the given value.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Answer confirms whose question contains `needle` with `answer`.
    pub fn set_confirm_response(&mut self, needle: &str, answer: bool) {
        self.confirm_responses.insert(needle.to_string(), answer);
    }

    /// All plain messages shown.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All success messages shown.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// All warnings shown.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// All errors shown.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All headers shown.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All spinner messages started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// All confirm questions shown.
    pub fn confirms_shown(&self) -> &[String] {
        &self.confirms_shown
    }

    /// All step progress entries shown.
    pub fn steps(&self) -> &[(usize, usize, String)] {
        &self.steps
    }

    /// Whether any warning contains `needle`.
    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings.iter().any(|w| w.contains(needle))
    }

    /// Whether any message (any severity) contains `needle`.
    pub fn has_output(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .chain(&self.headers)
            .any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.confirms_shown.push(question.to_string());
        let answer = self
            .confirm_responses
            .iter()
            .find(|(needle, _)| question.contains(needle.as_str()))
            .map(|(_, &answer)| answer)
            .unwrap_or(default);
        Ok(answer)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_step(&mut self, current: usize, total: usize, msg: &str) {
        self.steps.push((current, total, msg.to_string()));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner that records nothing.
struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
    fn finish_skipped(&mut self, _msg: &str) {}
}

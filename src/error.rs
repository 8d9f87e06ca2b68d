use combine::easy;
use combine::stream::position::SourcePosition;

/// The one error kind this crate produces. Calendar validity, transaction
/// balancing, and commodity lookups are all downstream concerns with their
/// own error types; a parse either succeeds completely or fails at exactly
/// one source position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse error at line {line}, column {column}: unexpected {found}{}", self.expected_suffix())]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub expected: Vec<String>,
    pub found: String,
}

impl ParseError {
    pub(crate) fn from_easy_errors(
        errors: easy::Errors<char, &str, SourcePosition>,
    ) -> ParseError {
        let mut expected = Vec::new();
        let mut found = String::from("end of input");

        for error in &errors.errors {
            match error {
                easy::Error::Expected(info) => expected.push(info.to_string()),
                easy::Error::Unexpected(info) => found = info.to_string(),
                easy::Error::Message(info) => found = info.to_string(),
                easy::Error::Other(err) => found = err.to_string(),
            }
        }

        ParseError {
            line: errors.position.line.max(1) as usize,
            column: errors.position.column.max(1) as usize,
            expected,
            found,
        }
    }

    fn expected_suffix(&self) -> String {
        if self.expected.is_empty() {
            String::new()
        } else {
            format!("; expected {}", self.expected.join(", "))
        }
    }
}

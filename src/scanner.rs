use crate::types::PlaceholderToken;

/// Generic closing marker shared by all commands.
const CLOSING_MARKER: &str = ")}";

/// Scanner for `{<command>(` ... `)}` placeholder tokens
///
/// The opening marker is command-specific and fixed per scanner; the
/// closing marker `)}` is generic. Scans are resumable from any byte
/// offset, which the engine uses to continue past each processed token.
///
/// The grammar has no escape mechanism: a literal `,`, `(`, `)`, `{` or
/// `}` inside a path component desynchronizes parsing. Callers that
/// need such characters in keys cannot express them in a token.
pub struct TokenScanner<'a> {
    input: &'a str,
    opening: String,
}

impl<'a> TokenScanner<'a> {
    /// Create a scanner over `input` for the given command name
    pub fn new(input: &'a str, command_name: &str) -> Self {
        Self {
            input,
            opening: format!("{{{}(", command_name),
        }
    }

    /// Find the next token at or after `from`
    ///
    /// Returns `None` when no opening marker remains, or when an opening
    /// marker has no closing marker after it. The latter ends the scan
    /// with the remainder of the input, dangling opener included, left
    /// untouched; an unterminated token is not an error.
    pub fn next_token(&self, from: usize) -> Option<PlaceholderToken> {
        let start = from + self.input.get(from..)?.find(&self.opening)?;
        let args_start = start + self.opening.len();
        let args_end = args_start + self.input[args_start..].find(CLOSING_MARKER)?;

        let components = self.input[args_start..args_end]
            .split(',')
            .map(str::to_string)
            .collect();

        Some(PlaceholderToken {
            start,
            end: args_end + CLOSING_MARKER.len(),
            components,
        })
    }
}

#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Byte offset into the source
    pub offset: u32,
    /// 1-based line
    pub line: u32,
    /// 1-based column, counted in characters
    pub column: u32,
    pub file: Arc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, column: u32, file: Arc<String>) -> Self {
        Position {
            offset,
            line,
            column,
            file,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span covering both `self` and `other`, assuming `self` starts first.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

/// Tokenizes and parses a whole source text in one go.
pub fn parse_source(source: String, file: Option<String>) -> Result<Program, Error> {
    let file_name = Arc::new(file.clone().unwrap_or_else(|| String::from("shell")));
    let tokens = tokenize(source, file)?;
    parse(tokens, file_name)
}

/// Returns the text of the 1-based `line` in `source`, without its line break.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line.saturating_sub(1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\n\nTesting { }\n";

        assert_eq!(super::get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line_at_position(source, 3), Some(""));
        assert_eq!(super::get_line_at_position(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_render_error() {
        let source = "fn main() {\n    let a = #;\n}\n".to_string();
        let error = crate::parse_source(source.clone(), Some("final.lang".to_string())).unwrap_err();

        let rendered = super::render_error(&error, &source);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Error: UnrecognisedToken");
        assert_eq!(lines[1], "-> final.lang:2:13");
        assert_eq!(lines[3], "2 | let a = #;");
        assert_eq!(lines[4], "  | --------^");
    }

    #[test]
    fn test_render_error_note() {
        let source = "fn main() {\n    f(a b);\n}\n".to_string();
        let error = crate::parse_source(source.clone(), Some("final.lang".to_string())).unwrap_err();

        let rendered = super::render_error(&error, &source);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[1], "-> final.lang:2:9");
        assert_eq!(lines[4], "  | ----^");
        assert_eq!(lines[5], "note: unclosed delimiter");
        assert_eq!(lines[6], "-> final.lang:2:6");
        assert_eq!(lines[8], "2 | f(a b);");
        assert_eq!(lines[9], "  | -^");
    }
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: message
/// -> final.lang:20:9
///   |
/// 20 | let a = #;
///    | --------^
/// ```
///
/// A note, when present, follows in the same layout under `note: message`.
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    render_snippet(&mut out, error.get_position(), source);

    if let Some((position, message)) = error.get_note() {
        out.push_str(&format!("note: {}\n", message));
        render_snippet(&mut out, position, source);
    }
    out
}

fn render_snippet(out: &mut String, position: &Position, source: &str) {
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("-> {}\n", position));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (&string[start..], start)
}

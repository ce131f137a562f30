use crate::ast::Span;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid syntax at {}:{}: {message}", span.line, span.column)]
    InvalidSyntax { span: Span, message: String },

    #[error("JavaScript grammar unavailable: {0}")]
    LanguageUnavailable(String),

    #[error("Parser produced no syntax tree")]
    ParserFailed,
}

impl ParseError {
    pub fn invalid_syntax(span: Span, message: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            span,
            message: message.into(),
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            ParseError::InvalidSyntax { span, .. } => Some(span),
            ParseError::LanguageUnavailable(_) | ParseError::ParserFailed => None,
        }
    }
}

/// Pretty-print errors with source context using ariadne
#[cfg(feature = "pretty-errors")]
pub mod pretty {
    use super::ParseError;
    use ariadne::{Color, Label, Report, ReportKind, Source};

    pub fn format_error(error: &ParseError, file_name: &str, source: &str) -> String {
        // ariadne labels count chars, tree-sitter spans count bytes
        let (start, end) = match error.span() {
            Some(span) => (char_offset(source, span.start), char_offset(source, span.end)),
            None => {
                let len = source.chars().count();
                (len.saturating_sub(1), len)
            }
        };

        let label_message = match error {
            ParseError::InvalidSyntax { message, .. } => message.clone(),
            other => other.to_string(),
        };

        let report = Report::build(ReportKind::Error, file_name, start)
            .with_message(error.to_string())
            .with_label(
                Label::new((file_name, start..end.max(start + 1)))
                    .with_color(Color::Red)
                    .with_message(label_message),
            )
            .finish();

        let mut output = Vec::new();
        if report
            .write((file_name, Source::from(source)), &mut output)
            .is_err()
        {
            return error.to_string();
        }

        String::from_utf8(output).unwrap_or_else(|_| error.to_string())
    }

    fn char_offset(source: &str, byte: usize) -> usize {
        source
            .get(..byte)
            .map(|prefix| prefix.chars().count())
            .unwrap_or_else(|| source.chars().count())
    }

}

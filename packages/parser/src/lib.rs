pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{Child, Span, SyntaxNode, SyntaxTree};
pub use error::{ParseError, ParseResult};
pub use parser::{parse, Parser};

use crate::ast::{Span, SyntaxTree};
use crate::error::{ParseError, ParseResult};
use tracing::debug;

/// Parse a JavaScript module (JSX, decorators and class fields included).
/// Flow type annotations are not part of the grammar and fail to parse.
///
/// The grammar recovers from malformed input, so the returned tree is
/// searched for error or missing nodes and the first one is reported.
pub fn parse(source: &str) -> ParseResult<SyntaxTree> {
    Parser::new()?.parse(source)
}

/// Reusable parser bound to the JavaScript grammar
pub struct Parser {
    inner: tree_sitter::Parser,
}

impl Parser {
    pub fn new() -> ParseResult<Self> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&tree_sitter_javascript::language())
            .map_err(|e| ParseError::LanguageUnavailable(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn parse(&mut self, source: &str) -> ParseResult<SyntaxTree> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or(ParseError::ParserFailed)?;

        if let Some(error) = first_error(tree.root_node(), source) {
            return Err(error);
        }

        debug!(bytes = source.len(), "Parsed module");
        Ok(SyntaxTree::new(source.to_string(), tree))
    }
}

fn first_error(node: tree_sitter::Node<'_>, source: &str) -> Option<ParseError> {
    if node.is_missing() {
        let position = node.start_position();
        let span = Span::new(
            node.start_byte(),
            node.end_byte(),
            position.row + 1,
            position.column + 1,
        );
        return Some(ParseError::invalid_syntax(
            span,
            format!("missing `{}`", node.kind()),
        ));
    }

    if node.is_error() {
        let position = node.start_position();
        let span = Span::new(
            node.start_byte(),
            node.end_byte(),
            position.row + 1,
            position.column + 1,
        );
        let snippet = source
            .get(node.start_byte()..node.end_byte())
            .and_then(|text| text.lines().next())
            .unwrap_or("");
        let message = if snippet.is_empty() {
            "unexpected end of input".to_string()
        } else {
            format!("unexpected `{}`", snippet.trim())
        };
        return Some(ParseError::invalid_syntax(span, message));
    }

    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .find_map(|child| first_error(child, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class_component() {
        let source = r#"
import React from 'react';

export default class Button extends React.Component {
    static propTypes = {
        label: React.PropTypes.string,
    };

    render() {
        return <button>{this.props.label}</button>;
    }
}
"#;

        let tree = parse(source).expect("Failed to parse");
        assert_eq!(tree.root().kind(), "program");
        assert_eq!(tree.source(), source);
    }

    #[test]
    fn test_parse_modern_syntax() {
        let source = r#"
@connect(state => state)
export default class Panel extends React.Component {
    state = { ...defaults, open: false };

    async load() {
        const { items, ...rest } = await fetchItems();
        return rest;
    }

    render() {
        return <div {...this.props}><span>{this.state.open ? 'a' : 'b'}</span></div>;
    }
}
"#;

        assert!(parse(source).is_ok());
    }

    #[test]
    fn test_parse_error_reports_location() {
        let source = "export default class {\n  render() {\n";
        let error = parse(source).expect_err("Expected parse error");

        match error {
            ParseError::InvalidSyntax { span, .. } => {
                assert!(span.line >= 1);
                assert!(span.start <= source.len());
            }
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_flow_annotations_are_rejected() {
        let source = "// @flow\ntype Props = { a: string };\nexport default class Foo extends React.Component<Props> { props: Props; }";
        let error = parse(source).expect_err("Expected parse error");

        match error {
            ParseError::InvalidSyntax { span, .. } => assert_eq!(span.line, 2),
            other => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parser_is_reusable() {
        let mut parser = Parser::new().expect("Grammar should load");
        assert!(parser.parse("let a = 1;").is_ok());
        assert!(parser.parse("let = ;").is_err());
        assert!(parser.parse("let b = 2;").is_ok());
    }
}

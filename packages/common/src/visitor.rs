use react_dts_parser::{Child, SyntaxNode};
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Callback invoked for every node of a registered kind
pub type Handler<'h, 't> = Box<dyn FnMut(SyntaxNode<'t>) + 'h>;

/// Dispatch table from node kind to handler
///
/// ```ignore
/// let mut classes = Vec::new();
/// walk(
///     tree.root(),
///     &mut Handlers::new().on("class_declaration", |node| classes.push(node)),
/// );
/// ```
pub struct Handlers<'h, 't> {
    table: HashMap<&'static str, Handler<'h, 't>>,
}

impl<'h, 't> Handlers<'h, 't> {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Register `handler` for `kind`, replacing any earlier registration
    pub fn on<F>(mut self, kind: &'static str, handler: F) -> Self
    where
        F: FnMut(SyntaxNode<'t>) + 'h,
    {
        self.table.insert(kind, Box::new(handler));
        self
    }

    pub fn handles(&self, kind: &str) -> bool {
        self.table.contains_key(kind)
    }

    fn dispatch(&mut self, node: SyntaxNode<'t>) {
        if let Some(handler) = self.table.get_mut(node.kind()) {
            trace!(kind = node.kind(), start = node.span().start, "Dispatching handler");
            handler(node);
        }
    }
}

impl Default for Handlers<'_, '_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handlers<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.table.keys().collect();
        kinds.sort();
        f.debug_struct("Handlers").field("kinds", &kinds).finish()
    }
}

/// Depth-first, pre-order walk dispatching each node to its kind's handler.
///
/// Children are always visited, whether or not the node itself matched, so a
/// node of a registered kind nested inside another one fires its handler too.
/// Callers that want only the first match keep their own sentinel.
/// Anonymous tokens are skipped.
pub fn walk<'t>(node: SyntaxNode<'t>, handlers: &mut Handlers<'_, 't>) {
    handlers.dispatch(node);

    for child in node.children() {
        if let Child::Node { node: child, .. } = child {
            walk(child, handlers);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use react_dts_parser::parse;

    #[test]
    fn test_walk_is_pre_order() {
        let tree = parse("a.b.c;").expect("Failed to parse");
        let mut seen = Vec::new();

        walk(
            tree.root(),
            &mut Handlers::new().on("member_expression", |node| seen.push(node.text())),
        );

        assert_eq!(seen, vec!["a.b.c", "a.b"]);
    }

    #[test]
    fn test_walk_does_not_short_circuit() {
        let source = r#"
class Outer {
    method() {
        class Inner {}
    }
}
"#;
        let tree = parse(source).expect("Failed to parse");
        let mut names = Vec::new();

        walk(
            tree.root(),
            &mut Handlers::new().on("class_declaration", |node| {
                if let Some(name) = node.field("name") {
                    names.push(name.text());
                }
            }),
        );

        assert_eq!(names, vec!["Outer", "Inner"]);
    }

    #[test]
    fn test_walk_dispatches_multiple_kinds_in_source_order() {
        let tree = parse("foo(1, 'two', 3);").expect("Failed to parse");
        let mut seen = Vec::new();

        {
            let seen = std::cell::RefCell::new(&mut seen);
            walk(
                tree.root(),
                &mut Handlers::new()
                    .on("number", |node| seen.borrow_mut().push(node.text()))
                    .on("string", |node| seen.borrow_mut().push(node.text())),
            );
        }

        assert_eq!(seen, vec!["1", "'two'", "3"]);
    }

    #[test]
    fn test_walk_without_handlers_visits_nothing() {
        let tree = parse("let x = 1;").expect("Failed to parse");
        let mut handlers = Handlers::new();

        walk(tree.root(), &mut handlers);

        assert!(!handlers.handles("program"));
    }

    #[test]
    fn test_later_registration_replaces_earlier() {
        let tree = parse("1;").expect("Failed to parse");
        let mut first = 0;
        let mut second = 0;

        walk(
            tree.root(),
            &mut Handlers::new()
                .on("number", |_| first += 1)
                .on("number", |_| second += 1),
        );

        assert_eq!(first, 0);
        assert_eq!(second, 1);
    }

    #[test]
    fn test_tokens_are_not_dispatched() {
        let tree = parse("export default 1;").expect("Failed to parse");
        let mut fired = false;

        walk(tree.root(), &mut Handlers::new().on("default", |_| fired = true));

        assert!(!fired);
    }
}

use std::fmt;

/// Span information for source location tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// 1-based line
    pub line: usize,
    /// 1-based column, in bytes
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    fn of(node: &tree_sitter::Node<'_>) -> Self {
        let position = node.start_position();
        Self::new(
            node.start_byte(),
            node.end_byte(),
            position.row + 1,
            position.column + 1,
        )
    }
}

/// A parsed source file. Owns both the text and the tree built over it.
pub struct SyntaxTree {
    source: String,
    tree: tree_sitter::Tree,
}

impl SyntaxTree {
    pub(crate) fn new(source: String, tree: tree_sitter::Tree) -> Self {
        Self { source, tree }
    }

    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode::new(self.tree.root_node(), &self.source)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("root", &self.root())
            .finish()
    }
}

/// A named node of the syntax tree: a kind discriminant plus a source location.
///
/// Nodes are cheap handles into their [`SyntaxTree`] and can be copied freely.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'t> {
    raw: tree_sitter::Node<'t>,
    source: &'t str,
}

/// One child slot of a node, in source order.
///
/// Named children are syntax nodes; anonymous children (keywords, punctuation)
/// are plain tokens and carry only their text.
#[derive(Debug, Clone, Copy)]
pub enum Child<'t> {
    Node {
        field: Option<&'static str>,
        node: SyntaxNode<'t>,
    },
    Token {
        field: Option<&'static str>,
        text: &'t str,
    },
}

impl<'t> Child<'t> {
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Child::Node { field, .. } | Child::Token { field, .. } => *field,
        }
    }

    pub fn as_node(&self) -> Option<SyntaxNode<'t>> {
        match self {
            Child::Node { node, .. } => Some(*node),
            Child::Token { .. } => None,
        }
    }
}

impl<'t> SyntaxNode<'t> {
    fn new(raw: tree_sitter::Node<'t>, source: &'t str) -> Self {
        Self { raw, source }
    }

    pub fn kind(&self) -> &'static str {
        self.raw.kind()
    }

    pub fn span(&self) -> Span {
        Span::of(&self.raw)
    }

    /// Source text covered by this node
    pub fn text(&self) -> &'t str {
        self.source
            .get(self.raw.start_byte()..self.raw.end_byte())
            .unwrap_or("")
    }

    /// All children in source order, tokens included
    pub fn children(&self) -> Vec<Child<'t>> {
        let mut children = Vec::with_capacity(self.raw.child_count());
        let mut cursor = self.raw.walk();

        if cursor.goto_first_child() {
            loop {
                let field = cursor.field_name();
                let raw = cursor.node();
                let child = if raw.is_named() {
                    Child::Node {
                        field,
                        node: SyntaxNode::new(raw, self.source),
                    }
                } else {
                    Child::Token {
                        field,
                        text: SyntaxNode::new(raw, self.source).text(),
                    }
                };
                children.push(child);

                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }

        children
    }

    pub fn named_children(&self) -> Vec<SyntaxNode<'t>> {
        self.children()
            .into_iter()
            .filter_map(|child| child.as_node())
            .collect()
    }

    /// Child occupying the grammar field `name`, if it is a named node
    pub fn field(&self, name: &str) -> Option<SyntaxNode<'t>> {
        self.raw
            .child_by_field_name(name)
            .filter(|raw| raw.is_named())
            .map(|raw| SyntaxNode::new(raw, self.source))
    }

    /// Whether an anonymous token with exactly this text is a direct child
    pub fn has_token(&self, text: &str) -> bool {
        self.children()
            .iter()
            .any(|child| matches!(child, Child::Token { text: t, .. } if *t == text))
    }

    pub fn parent(&self) -> Option<SyntaxNode<'t>> {
        self.raw
            .parent()
            .map(|raw| SyntaxNode::new(raw, self.source))
    }

    pub fn prev_named_sibling(&self) -> Option<SyntaxNode<'t>> {
        self.raw
            .prev_named_sibling()
            .map(|raw| SyntaxNode::new(raw, self.source))
    }

    /// Identity comparison within one tree
    pub fn is_same(&self, other: &SyntaxNode<'_>) -> bool {
        self.raw.id() == other.raw.id()
    }

    pub fn is_comment(&self) -> bool {
        self.kind() == "comment"
    }
}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        write!(f, "{}@{}..{}", self.kind(), span.start, span.end)
    }
}

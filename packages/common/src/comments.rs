use react_dts_parser::SyntaxNode;

/// Body of the JSDoc comment directly preceding `node`, `/*` and `*/` removed.
///
/// Only `/** ... */` comments count; line comments and plain `/* */`
/// directives are ignored. `/** Label */` yields `"* Label "`.
pub fn leading_doc_comment(node: SyntaxNode<'_>) -> Option<String> {
    let comment = node.prev_named_sibling().filter(|n| n.is_comment())?;
    let body = comment.text().strip_prefix("/*")?.strip_suffix("*/")?;
    if !body.starts_with('*') || body == "*" {
        return None;
    }
    Some(body.to_string())
}

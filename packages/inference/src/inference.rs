use crate::codegen::typescript::TypeScriptGenerator;
use crate::options::InferenceOptions;
use crate::types::{InferredProp, PropTypeTable, Type};
use react_dts_common::{leading_doc_comment, walk, Handlers};
use react_dts_parser::SyntaxNode;
use std::collections::HashMap;
use tracing::debug;

/// Maps propType validator expressions to declared TypeScript types.
///
/// Inference never fails: any expression it does not recognise is `any`.
pub struct InferenceEngine {
    options: InferenceOptions,
    validators: HashMap<String, Type>,
    generator: TypeScriptGenerator,
}

impl InferenceEngine {
    pub fn new(options: InferenceOptions) -> Self {
        let mut validators = HashMap::new();
        for (name, type_) in Type::VALIDATORS {
            validators.insert(format!("{}.PropTypes.{}", options.library, name), type_);
            if options.standalone_prop_types {
                validators.insert(format!("PropTypes.{}", name), type_);
            }
        }

        let generator = TypeScriptGenerator::new(options.library.clone());

        Self {
            options,
            validators,
            generator,
        }
    }

    pub fn options(&self) -> &InferenceOptions {
        &self.options
    }

    /// Declared type of a validator expression
    pub fn infer(&self, node: SyntaxNode<'_>) -> Type {
        let node = unparenthesized(node);
        if node.kind() != "member_expression" {
            return Type::Any;
        }

        canonical_name(node)
            .and_then(|name| self.validators.get(&name).copied())
            .unwrap_or(Type::Any)
    }

    /// Declared type of a validator expression, rendered as TypeScript
    pub fn infer_type(&self, node: SyntaxNode<'_>) -> String {
        self.generator.generate_type(&self.infer(node))
    }

    /// Build the table for a `propTypes` object literal from its own entries
    pub fn infer_prop_types(&self, object: SyntaxNode<'_>) -> PropTypeTable {
        let mut table = PropTypeTable::new();

        walk(
            object,
            &mut Handlers::new().on("pair", |pair| {
                let own = pair.parent().is_some_and(|parent| parent.is_same(&object));
                if !own {
                    return;
                }

                let (Some(key), Some(value)) = (pair.field("key"), pair.field("value")) else {
                    return;
                };

                let Some(name) = property_key_name(key) else {
                    debug!(key = key.text(), "Skipping computed propTypes key");
                    return;
                };

                let prop = InferredProp::new(self.infer_type(value))
                    .with_doc(leading_doc_comment(pair));
                debug!(prop = %name, type_name = %prop.type_name, "Inferred prop type");
                table.insert(name, prop);
            }),
        );

        for member in object.named_children() {
            if matches!(
                member.kind(),
                "spread_element" | "shorthand_property_identifier" | "method_definition"
            ) {
                debug!(kind = member.kind(), text = member.text(), "Skipping propTypes entry");
            }
        }

        table
    }
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new(InferenceOptions::default())
    }
}

/// Declared type of a validator expression with default options
pub fn infer_type(node: SyntaxNode<'_>) -> String {
    InferenceEngine::default().infer_type(node)
}

/// Dotted name of a member-access chain such as `React.PropTypes.bool`.
///
/// Only chains rooted at a plain identifier have one. Parentheses anywhere
/// in the chain are transparent.
pub fn canonical_name(node: SyntaxNode<'_>) -> Option<String> {
    let node = unparenthesized(node);
    match node.kind() {
        "identifier" => Some(node.text().to_string()),
        "member_expression" => {
            let object = node.field("object")?;
            let property = node.field("property")?;
            if property.kind() != "property_identifier" {
                return None;
            }
            Some(format!("{}.{}", canonical_name(object)?, property.text()))
        }
        _ => None,
    }
}

/// Expression inside any number of wrapping parentheses
fn unparenthesized(mut node: SyntaxNode<'_>) -> SyntaxNode<'_> {
    while node.kind() == "parenthesized_expression" {
        match node.named_children().into_iter().find(|n| !n.is_comment()) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Interface member name for an object key.
///
/// String keys drop their quotes only when the content is a plain
/// identifier; anything else keeps the source literal.
fn property_key_name(key: SyntaxNode<'_>) -> Option<String> {
    match key.kind() {
        "property_identifier" | "identifier" | "number" => Some(key.text().to_string()),
        "string" => {
            let text = key.text();
            let inner = text.get(1..text.len().saturating_sub(1))?;
            if is_identifier(inner) {
                Some(inner.to_string())
            } else {
                Some(text.to_string())
            }
        }
        _ => None,
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

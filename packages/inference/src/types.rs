use indexmap::IndexMap;

/// Type declared by a recognised propType validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Unconstrained; also the fallback for anything unrecognised
    Any,

    /// `array` validator
    AnyArray,

    /// `bool` validator
    Boolean,

    /// `func` validator
    Function,

    Number,

    /// `object` validator, declared as the loose `Object` type
    Object,

    String,

    /// Anything renderable (`node` validator)
    Node,

    /// A rendered element (`element` validator)
    Element,
}

impl Type {
    /// Validator property name and the type it declares
    pub const VALIDATORS: [(&'static str, Type); 9] = [
        ("any", Type::Any),
        ("array", Type::AnyArray),
        ("bool", Type::Boolean),
        ("func", Type::Function),
        ("number", Type::Number),
        ("object", Type::Object),
        ("string", Type::String),
        ("node", Type::Node),
        ("element", Type::Element),
    ];
}

/// One entry of a [`PropTypeTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredProp {
    /// Rendered TypeScript type
    pub type_name: String,

    /// Body of the JSDoc comment directly preceding the entry, without the
    /// `/*` and `*/` delimiters
    pub doc: Option<String>,
}

impl InferredProp {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            doc: None,
        }
    }

    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }
}

/// Property name to inferred type, in source order.
/// The order is the emitted interface member order.
pub type PropTypeTable = IndexMap<String, InferredProp>;

use crate::types::Type;

/// TypeScript renderer for inferred types
pub struct TypeScriptGenerator {
    library: String,
}

impl TypeScriptGenerator {
    /// `library` qualifies the renderable node/element types
    pub fn new(library: impl Into<String>) -> Self {
        Self {
            library: library.into(),
        }
    }

    pub fn generate_type(&self, type_: &Type) -> String {
        match type_ {
            Type::Any => "any".to_string(),
            Type::AnyArray => "any[]".to_string(),
            Type::Boolean => "boolean".to_string(),
            Type::Function => "(...args: any[]) => any".to_string(),
            Type::Number => "number".to_string(),
            Type::Object => "Object".to_string(),
            Type::String => "string".to_string(),
            Type::Node => format!("{}.ReactNode", self.library),
            Type::Element => format!("{}.ReactElement<any>", self.library),
        }
    }

    /// `name?: type` or `name: type`, without the terminating semicolon
    pub fn generate_property(&self, name: &str, type_name: &str, optional: bool) -> String {
        let optional_marker = if optional { "?" } else { "" };
        format!("{}{}: {}", name, optional_marker, type_name)
    }
}

impl Default for TypeScriptGenerator {
    fn default() -> Self {
        Self::new("React")
    }
}

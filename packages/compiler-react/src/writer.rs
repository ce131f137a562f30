use react_dts_inference::{InferenceOptions, PropTypeTable, TypeScriptGenerator};

/// Options for declaration generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Namespace the rendering library is imported under
    pub library: String,
    /// Module the rendering library is imported from
    pub library_module: String,
    /// One level of indentation
    pub indent: String,
    /// Name of the emitted props interface
    pub interface_name: String,
    /// Recognise bare `PropTypes.<name>` validators
    pub standalone_prop_types: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            library: "React".to_string(),
            library_module: "react".to_string(),
            indent: "\t".to_string(),
            interface_name: "Props".to_string(),
            standalone_prop_types: true,
        }
    }
}

impl CompileOptions {
    pub fn inference_options(&self) -> InferenceOptions {
        InferenceOptions {
            library: self.library.clone(),
            standalone_prop_types: self.standalone_prop_types,
        }
    }

    /// Base class components extend, e.g. `React.Component`
    pub fn component_base(&self) -> String {
        format!("{}.Component", self.library)
    }
}

/// Text emitter for TypeScript declarations with explicit indentation.
///
/// Every line is prefixed with one indent unit per open block. Blocks are
/// opened and closed in pairs by the composite operations, so braces stay
/// balanced. The writer is consumed by [`DeclarationWriter::finish`].
pub struct DeclarationWriter {
    buffer: String,
    depth: usize,
    indent_unit: String,
    types: TypeScriptGenerator,
}

impl DeclarationWriter {
    pub fn new() -> Self {
        Self::with_indent("\t")
    }

    pub fn with_indent(indent_unit: &str) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            indent_unit: indent_unit.to_string(),
            types: TypeScriptGenerator::default(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent_unit);
        }
    }

    pub fn emit_line(&mut self, text: &str) {
        self.write_indent();
        self.buffer.push_str(text);
        self.newline();
    }

    /// Bare line break, never indented
    pub fn newline(&mut self) {
        self.buffer.push('\n');
    }

    pub fn open_block(&mut self, header: &str) {
        self.emit_line(&format!("{} {{", header));
        self.depth += 1;
    }

    pub fn close_block(&mut self) {
        debug_assert!(self.depth > 0, "close_block without matching open_block");
        self.depth = self.depth.saturating_sub(1);
        self.emit_line("}");
    }

    pub fn property(&mut self, name: &str, type_name: &str, optional: bool) {
        let line = self.types.generate_property(name, type_name, optional);
        self.emit_line(&format!("{};", line));
    }

    /// Block comment around `text`, which excludes the `/*` `*/` delimiters.
    ///
    /// Continuation lines lose their source indentation and are re-indented
    /// at the current depth; JSDoc `*` gutters keep a one-space offset.
    pub fn comment(&mut self, text: &str) {
        let mut lines = text.split('\n').map(|line| line.trim_end_matches('\r'));
        let first = lines.next().unwrap_or("");
        let rest: Vec<&str> = lines.collect();

        self.write_indent();
        self.buffer.push_str("/*");
        self.buffer.push_str(first);

        for (i, line) in rest.iter().enumerate() {
            let trimmed = line.trim_start();
            let last = i + 1 == rest.len();

            self.newline();
            self.write_indent();
            if trimmed.starts_with('*') || (last && trimmed.is_empty()) {
                self.buffer.push(' ');
            }
            self.buffer.push_str(trimmed);
        }

        self.buffer.push_str("*/");
        self.newline();
    }

    pub fn declare_module(&mut self, name: &str, body: impl FnOnce(&mut Self)) {
        self.open_block(&format!("declare module '{}'", name));
        body(self);
        self.close_block();
    }

    /// Namespace import. Not a block: `body` runs at the same depth.
    pub fn import_all(&mut self, alias: &str, from: &str, body: impl FnOnce(&mut Self)) {
        self.emit_line(&format!("import * as {} from '{}';", alias, from));
        body(self);
    }

    /// Interface with one optional member per table entry, in table order
    pub fn interface(&mut self, name: &str, props: &PropTypeTable) {
        self.open_block(&format!("interface {}", name));
        for (prop_name, prop) in props {
            if let Some(doc) = &prop.doc {
                self.comment(doc);
            }
            self.property(prop_name, &prop.type_name, true);
        }
        self.close_block();
    }

    /// `export default ` prefix; `body` continues on the same line
    pub fn export_default(&mut self, body: impl FnOnce(&mut Self)) {
        self.write_indent();
        self.buffer.push_str("export default ");
        body(self);
    }

    /// Class block written inline after an export prefix.
    /// `props_interface` parameterises the base class; `None` means `any`.
    pub fn class_decl(
        &mut self,
        name: &str,
        base: &str,
        props_interface: Option<&str>,
        body: impl FnOnce(&mut Self),
    ) {
        self.buffer.push_str(&format!(
            "class {} extends {}<{}, any> {{",
            name,
            base,
            props_interface.unwrap_or("any")
        ));
        self.newline();
        self.depth += 1;
        body(self);
        self.close_block();
    }

    pub fn finish(self) -> String {
        debug_assert_eq!(self.depth, 0, "unclosed block at finish");
        self.buffer
    }
}

impl Default for DeclarationWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use react_dts_inference::InferredProp;

    fn props(entries: &[(&str, &str)]) -> PropTypeTable {
        entries
            .iter()
            .map(|(name, type_name)| (name.to_string(), InferredProp::new(*type_name)))
            .collect()
    }

    #[test]
    fn test_declare_module() {
        let mut writer = DeclarationWriter::new();
        writer.declare_module("name", |_| {});
        assert_eq!(writer.finish(), "declare module 'name' {\n}\n");
    }

    #[test]
    fn test_import_statement() {
        let mut writer = DeclarationWriter::new();
        writer.import_all("React", "react", |_| {});
        assert_eq!(writer.finish(), "import * as React from 'react';\n");
    }

    #[test]
    fn test_import_does_not_indent_body() {
        let mut writer = DeclarationWriter::new();
        writer.import_all("React", "react", |w| {
            assert_eq!(w.depth(), 0);
            w.emit_line("next");
        });
        assert_eq!(
            writer.finish(),
            "import * as React from 'react';\nnext\n"
        );
    }

    #[test]
    fn test_required_property() {
        let mut writer = DeclarationWriter::new();
        writer.property("name", "type", false);
        assert_eq!(writer.finish(), "name: type;\n");
    }

    #[test]
    fn test_optional_property() {
        let mut writer = DeclarationWriter::new();
        writer.property("name", "type", true);
        assert_eq!(writer.finish(), "name?: type;\n");
    }

    #[test]
    fn test_interface_properties_are_optional_and_ordered() {
        let mut writer = DeclarationWriter::new();
        writer.interface("Props", &props(&[("zeta", "string"), ("alpha", "boolean")]));
        assert_eq!(
            writer.finish(),
            "interface Props {\n\tzeta?: string;\n\talpha?: boolean;\n}\n"
        );
    }

    #[test]
    fn test_empty_interface() {
        let mut writer = DeclarationWriter::new();
        writer.interface("Props", &PropTypeTable::new());
        assert_eq!(writer.finish(), "interface Props {\n}\n");
    }

    #[test]
    fn test_class_with_props() {
        let mut writer = DeclarationWriter::new();
        writer.class_decl("Name", "React.Component", Some("Props"), |_| {});
        assert_eq!(
            writer.finish(),
            "class Name extends React.Component<Props, any> {\n}\n"
        );
    }

    #[test]
    fn test_class_without_props() {
        let mut writer = DeclarationWriter::new();
        writer.class_decl("Name", "React.Component", None, |_| {});
        assert_eq!(
            writer.finish(),
            "class Name extends React.Component<any, any> {\n}\n"
        );
    }

    #[test]
    fn test_indented_block_comment() {
        let mut writer = DeclarationWriter::new();
        writer.comment("* yada\n\t\t\t\tyada\n ");
        assert_eq!(writer.finish(), "/** yada\nyada\n */\n");
    }

    #[test]
    fn test_jsdoc_comment_is_reindented() {
        let mut writer = DeclarationWriter::new();
        writer.open_block("interface Props");
        writer.comment("*\n     * Label text\n     ");
        writer.close_block();
        assert_eq!(
            writer.finish(),
            "interface Props {\n\t/**\n\t * Label text\n\t */\n}\n"
        );
    }

    #[test]
    fn test_single_line_comment() {
        let mut writer = DeclarationWriter::new();
        writer.comment("* Label ");
        assert_eq!(writer.finish(), "/** Label */\n");
    }

    #[test]
    fn test_export_default_prefix() {
        let mut writer = DeclarationWriter::new();
        writer.export_default(|_| {});
        assert_eq!(writer.finish(), "export default ");
    }

    #[test]
    fn test_nested_blocks_are_balanced_and_indented() {
        let mut writer = DeclarationWriter::new();
        writer.declare_module("mod", |w| {
            w.interface("Props", &props(&[("a", "any")]));
            w.export_default(|w| {
                w.class_decl("A", "React.Component", Some("Props"), |w| {
                    w.emit_line("render(): any;");
                })
            });
        });
        let output = writer.finish();

        assert_eq!(
            output,
            "declare module 'mod' {\n\
             \tinterface Props {\n\
             \t\ta?: any;\n\
             \t}\n\
             \texport default class A extends React.Component<Props, any> {\n\
             \t\trender(): any;\n\
             \t}\n\
             }\n"
        );

        let opens = output.matches('{').count();
        let closes = output.matches('}').count();
        assert_eq!(opens, closes);

        let mut depth = 0usize;
        for line in output.lines() {
            if line.trim_start().starts_with('}') {
                depth -= 1;
            }
            let tabs = line.len() - line.trim_start_matches('\t').len();
            assert_eq!(tabs, depth, "line {:?}", line);
            if line.ends_with('{') {
                depth += 1;
            }
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_custom_indent_unit() {
        let mut writer = DeclarationWriter::with_indent("  ");
        writer.declare_module("m", |w| w.emit_line("x"));
        assert_eq!(writer.finish(), "declare module 'm' {\n  x\n}\n");
    }
}

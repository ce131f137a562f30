use crate::writer::{CompileOptions, DeclarationWriter};
use crate::CompileResult;
use react_dts_common::{leading_doc_comment, walk, FileSystem, Handlers, RealFileSystem};
use react_dts_inference::{InferenceEngine, PropTypeTable};
use react_dts_parser::{parse, SyntaxNode};
use std::cell::RefCell;
use std::path::Path;
use tracing::{debug, info, warn};

/// The default-exported component class and what was inferred for it
struct ComponentClass<'t> {
    name: &'t str,
    doc: Option<String>,
    prop_types: Option<PropTypeTable>,
}

/// Generate the ambient module declaration for a component source file
pub fn generate(module_name: &str, source: &str) -> CompileResult<String> {
    generate_with_options(module_name, source, &CompileOptions::default())
}

/// Read `path` and generate its ambient module declaration
pub fn generate_from_file(module_name: &str, path: impl AsRef<Path>) -> CompileResult<String> {
    generate_from_file_with(
        &RealFileSystem,
        module_name,
        path.as_ref(),
        &CompileOptions::default(),
    )
}

pub fn generate_from_file_with(
    fs: &dyn FileSystem,
    module_name: &str,
    path: &Path,
    options: &CompileOptions,
) -> CompileResult<String> {
    let source = fs.read_to_string(path)?;
    debug!(path = %path.display(), "Read component source");
    generate_with_options(module_name, &source, options)
}

pub fn generate_with_options(
    module_name: &str,
    source: &str,
    options: &CompileOptions,
) -> CompileResult<String> {
    let tree = parse(source)?;
    let engine = InferenceEngine::new(options.inference_options());
    let component = find_default_export(tree.root())
        .and_then(find_component_class)
        .map(|(class, name)| describe_component(&engine, class, name));

    match &component {
        Some(component) => info!(
            module = module_name,
            component = component.name,
            typed_props = component.prop_types.is_some(),
            "Generating component declaration"
        ),
        None => info!(module = module_name, "No default-exported class found"),
    }

    let mut writer = DeclarationWriter::with_indent(&options.indent);
    writer.declare_module(module_name, |w| {
        w.import_all(&options.library, &options.library_module, |w| {
            w.newline();
            if let Some(component) = &component {
                emit_component(w, component, options);
            }
        });
    });

    Ok(writer.finish())
}

/// First `export default ...` statement of the program
fn find_default_export<'t>(root: SyntaxNode<'t>) -> Option<SyntaxNode<'t>> {
    let mut export: Option<SyntaxNode<'t>> = None;

    walk(
        root,
        &mut Handlers::new().on("export_statement", |node| {
            if !node.has_token("default") {
                return;
            }
            if export.is_some() {
                warn!(line = node.span().line, "Ignoring additional default export");
                return;
            }
            debug!(line = node.span().line, "Found default export");
            export = Some(node);
        }),
    );

    export
}

/// The component class inside a default export, with its name.
///
/// The first class in pre-order is the component; classes nested inside it
/// are reported and not emitted. Class expressions only count when they are
/// the exported value itself.
fn find_component_class<'t>(export: SyntaxNode<'t>) -> Option<(SyntaxNode<'t>, &'t str)> {
    let found: RefCell<Option<SyntaxNode<'t>>> = RefCell::new(None);

    let visit = |class: SyntaxNode<'t>| {
        let mut found = found.borrow_mut();
        let current = *found;
        match current {
            None => *found = Some(class),
            Some(component) => warn!(
                line = class.span().line,
                name = class.field("name").map(|n| n.text()).unwrap_or("<anonymous>"),
                component = component.field("name").map(|n| n.text()).unwrap_or("<anonymous>"),
                "Ignoring class nested inside the exported component"
            ),
        }
    };

    walk(
        export,
        &mut Handlers::new()
            .on("class_declaration", &visit)
            .on("class", |class| {
                let exported = class.parent().is_some_and(|parent| parent.is_same(&export));
                if exported {
                    visit(class);
                }
            }),
    );

    let class = found.into_inner()?;
    let Some(name) = class.field("name") else {
        debug!(line = class.span().line, "Skipping anonymous default-exported class");
        return None;
    };

    Some((class, name.text()))
}

fn describe_component<'t>(
    engine: &InferenceEngine,
    class: SyntaxNode<'t>,
    name: &'t str,
) -> ComponentClass<'t> {
    let prop_types = find_prop_types(class).and_then(|value| {
        if value.kind() == "object" {
            Some(engine.infer_prop_types(value))
        } else {
            debug!(kind = value.kind(), "propTypes is not an object literal");
            None
        }
    });

    let export = class
        .parent()
        .filter(|parent| parent.kind() == "export_statement")
        .unwrap_or(class);

    ComponentClass {
        name,
        doc: leading_doc_comment(export),
        prop_types,
    }
}

/// Initializer of the class's own `propTypes` field
fn find_prop_types<'t>(class: SyntaxNode<'t>) -> Option<SyntaxNode<'t>> {
    let body = class.field("body")?;
    let mut field: Option<SyntaxNode<'t>> = None;

    walk(
        body,
        &mut Handlers::new().on("field_definition", |node| {
            let own = node.parent().is_some_and(|parent| parent.is_same(&body));
            let named_prop_types = node
                .field("property")
                .is_some_and(|property| property.text() == "propTypes");
            if own && named_prop_types {
                field = Some(node);
            }
        }),
    );

    field.and_then(|field| field.field("value"))
}

fn emit_component(
    w: &mut DeclarationWriter,
    component: &ComponentClass<'_>,
    options: &CompileOptions,
) {
    if let Some(props) = &component.prop_types {
        w.interface(&options.interface_name, props);
        w.newline();
    }

    if let Some(doc) = &component.doc {
        w.comment(doc);
    }

    let props_interface = component
        .prop_types
        .as_ref()
        .map(|_| options.interface_name.as_str());
    let base = options.component_base();

    w.export_default(|w| w.class_decl(component.name, &base, props_interface, |_| {}));
}

use react_dts_compiler::{generate, generate_with_options, CompileOptions};

fn main() {
    let source = r#"
import React from 'react';

/**
 * Card with an optional footer.
 */
export default class Card extends React.Component {
    static propTypes = {
        /** Heading text */
        title: React.PropTypes.string,
        footer: React.PropTypes.node,
        onClose: React.PropTypes.func,
        items: React.PropTypes.arrayOf(React.PropTypes.string),
    };

    render() {
        return (
            <div className="card">
                <h1>{this.props.title}</h1>
                {this.props.footer}
            </div>
        );
    }
}
"#;

    match generate("card", source) {
        Ok(declaration) => {
            println!("=== Card.d.ts ===");
            println!("{}", declaration);
        }
        Err(e) => eprintln!("Generation failed: {}", e),
    }

    let options = CompileOptions {
        library: "Preact".to_string(),
        library_module: "preact".to_string(),
        indent: "  ".to_string(),
        ..Default::default()
    };
    let source = source.replace("React.", "Preact.");

    match generate_with_options("card", &source, &options) {
        Ok(declaration) => {
            println!("=== Card.d.ts (preact) ===");
            println!("{}", declaration);
        }
        Err(e) => eprintln!("Generation failed: {}", e),
    }
}

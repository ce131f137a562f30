use criterion::{black_box, criterion_group, criterion_main, Criterion};
use react_dts_parser::parse;

fn parse_simple_component(c: &mut Criterion) {
    let source = r#"
        import React from 'react';

        export default class Button extends React.Component {
            static propTypes = {
                label: React.PropTypes.string,
                disabled: React.PropTypes.bool,
            };

            render() {
                return <button disabled={this.props.disabled}>{this.props.label}</button>;
            }
        }
    "#;

    c.bench_function("parse_simple_component", |b| {
        b.iter(|| parse(black_box(source)))
    });
}

fn parse_large_component(c: &mut Criterion) {
    let mut source = String::from("export default class List extends React.Component {\n");
    source.push_str("    static propTypes = {\n");
    for i in 0..200 {
        source.push_str(&format!("        item{}: React.PropTypes.node,\n", i));
    }
    source.push_str("    };\n");
    for i in 0..50 {
        source.push_str(&format!(
            "    renderItem{}() {{ return <li key=\"{}\">{{this.props.item{}}}</li>; }}\n",
            i, i, i
        ));
    }
    source.push_str("}\n");

    c.bench_function("parse_large_component", |b| {
        b.iter(|| parse(black_box(&source)))
    });
}

criterion_group!(benches, parse_simple_component, parse_large_component);
criterion_main!(benches);

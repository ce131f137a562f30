//! # react-dts inference
//!
//! Maps `propTypes` validator expressions to TypeScript types.
//!
//! Only member-access chains are resolved. The chain is flattened into its
//! canonical dotted name (`React.PropTypes.bool`) and looked up in a fixed
//! validator table; everything else, including `.isRequired` chains and
//! validator calls such as `arrayOf(...)`, is declared `any`.
//!
//! ## Example
//!
//! ```rust
//! use react_dts_inference::InferenceEngine;
//! use react_dts_parser::parse;
//!
//! let tree = parse("x = { label: React.PropTypes.string };").unwrap();
//! let program = tree.root();
//! let assignment = program.named_children()[0].named_children()[0];
//! let object = assignment.field("right").unwrap();
//!
//! let table = InferenceEngine::default().infer_prop_types(object);
//! assert_eq!(table["label"].type_name, "string");
//! ```

pub mod codegen;
pub mod inference;
pub mod options;
pub mod types;

pub use codegen::typescript::TypeScriptGenerator;
pub use inference::{canonical_name, infer_type, InferenceEngine};
pub use options::InferenceOptions;
pub use types::{InferredProp, PropTypeTable, Type};

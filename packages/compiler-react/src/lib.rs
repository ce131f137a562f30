mod definitions;
mod writer;

pub use definitions::{
    generate, generate_from_file, generate_from_file_with, generate_with_options,
};
pub use writer::{CompileOptions, DeclarationWriter};

pub use react_dts_common::{CommonError as CompileError, CommonResult as CompileResult};

// Re-export from inference crate for convenience
pub use react_dts_inference::{InferenceEngine, InferenceOptions, InferredProp, PropTypeTable};

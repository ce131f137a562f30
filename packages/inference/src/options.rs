/// Configuration options for propType inference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceOptions {
    /// Namespace the component library is imported under.
    /// Validators are recognised as `<library>.PropTypes.<name>` and the
    /// renderable types are qualified with it (`React.ReactNode`).
    pub library: String,

    /// Also recognise bare `PropTypes.<name>` chains, as written with the
    /// standalone `prop-types` package
    pub standalone_prop_types: bool,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            library: "React".to_string(),
            standalone_prop_types: true,
        }
    }
}

impl InferenceOptions {
    /// Options for a library imported under `library`
    pub fn for_library(library: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            ..Default::default()
        }
    }

    /// Only the library-qualified `<library>.PropTypes.<name>` chains
    pub fn strict(library: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            standalone_prop_types: false,
        }
    }
}

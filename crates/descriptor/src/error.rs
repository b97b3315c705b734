use thiserror::Error;

/// Error type for descriptor parsing.
///
/// Any of these aborts the whole initialization; descriptors are never
/// partially applied.
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("malformed descriptor '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("descriptor '{path}' is missing required field '{field}'")]
    MissingField { path: String, field: &'static str },
}

impl DescriptorError {
    pub(crate) fn malformed(path: &str, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn missing_field(path: &str, field: &'static str) -> Self {
        Self::MissingField {
            path: path.to_string(),
            field,
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unable to open file: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading file: {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Shader source contains an interior nul byte: {path}")]
    InvalidSource { path: String },

    #[error("{stage} shader error: {log}")]
    CompilationFailed { stage: &'static str, log: String },

    #[error("Shader link error: {log}")]
    LinkingFailed { log: String },
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybookError {
    #[error("not initialized: run 'playbook init'")]
    NotInitialized,

    #[error("persona not found: {0}")]
    PersonaNotFound(String),

    #[error("persona already exists: {0}")]
    PersonaExists(String),

    #[error("stage not found: {0}")]
    StageNotFound(String),

    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    #[error("invalid slug '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error("invalid resource type: {0}")]
    InvalidResourceType(String),

    #[error("invalid list kind '{0}': expected tags, categories, or lobs")]
    InvalidListKind(String),

    #[error("assist key not set: run 'playbook assist --set-key'")]
    AssistKeyMissing,

    #[error("assist request failed ({status}): {message}")]
    Assist { status: u16, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlaybookError>;

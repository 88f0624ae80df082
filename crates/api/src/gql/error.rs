use thiserror::Error;

use super::module::TypeKind;

/// Resolver failures. Store errors are logged in full and reach the client
/// as a generic message.
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
    SerdeJson(serde_json::Error),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::SerdeJson(e) => write!(f, "Serialization error: {e}"),
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(e)
    }
}

impl From<serde_json::Error> for GqlError {
    fn from(e: serde_json::Error) -> Self {
        GqlError::SerdeJson(e)
    }
}

/// Failures while merging schema modules into one executable schema.
/// All of them are fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompositionError {
    #[error("module id `{0}` is registered twice")]
    DuplicateModule(&'static str),

    #[error("{kind} `{type_name}` is declared by `{first}` and `{second}` with different shapes")]
    IncompatibleType {
        kind: TypeKind,
        type_name: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("field `{type_name}.{field}` is declared by `{first}` and again by `{second}`")]
    DuplicateField {
        type_name: String,
        field: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("field `{type_name}.{field}` is bound to resolvers in `{first}` and `{second}`")]
    DuplicateResolver {
        type_name: String,
        field: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("module `{module}` extends `{type_name}`, which no module declares")]
    UnknownExtension {
        module: &'static str,
        type_name: String,
    },

    #[error("`{type_name}.{field}` refers to unknown type `{missing}`")]
    UnknownType {
        type_name: String,
        field: String,
        missing: String,
    },

    #[error("schema build failed: {0}")]
    Build(String),
}

impl From<async_graphql::dynamic::SchemaError> for CompositionError {
    fn from(e: async_graphql::dynamic::SchemaError) -> Self {
        CompositionError::Build(e.to_string())
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while loading a catalog. Queries over a loaded catalog never fail.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON or TOML: {0}")]
    Parse(String),

    #[error("catalog.schema_version {0} is not supported (expected 1)")]
    UnsupportedSchema(u32),

    #[error("Catalog contains unknown fields: {0}")]
    UnknownFields(String),

    #[error("Item at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Item '{0}' has an empty category")]
    EmptyCategory(String),

    #[error("Item '{0}' uses the reserved category '{1}'")]
    ReservedCategory(String, &'static str),

    #[error("Duplicate item id '{0}'")]
    DuplicateId(String),
}

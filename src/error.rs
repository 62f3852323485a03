use thiserror::Error;

/// Errors reported by [`crate::pool::SharedPool`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("invalid discriminator: key must be a non-empty string")]
    InvalidDiscriminator,
}

/// Errors reported when constructing an interceptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterceptError {
    #[error("invalid target: no target was supplied to wrap")]
    InvalidTarget,
}

/// Errors reported by the enum-keyed shape factory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("unknown shape kind: '{name}'")]
    UnknownVariant { name: String },
}

impl FactoryError {
    pub fn unknown_variant(name: impl Into<String>) -> Self {
        Self::UnknownVariant { name: name.into() }
    }
}

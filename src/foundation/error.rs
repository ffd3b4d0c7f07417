/// Convenience result type used across the crate.
pub type SafeAreaResult<T> = Result<T, SafeAreaError>;

/// Top-level error taxonomy used by the adjuster, configuration and replay APIs.
#[derive(thiserror::Error, Debug)]
pub enum SafeAreaError {
    /// Padding output was requested but the UI root has no layout container attached.
    ///
    /// Fatal for the adjuster that raised it: it disables itself before returning.
    #[error("configuration error: padding mode requires a layout container on the UI root")]
    MissingLayoutContainer,

    /// Invalid user-provided configuration or scenario data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SafeAreaError {
    /// Build a [`SafeAreaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SafeAreaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error came from the missing-layout-container check.
    pub fn is_missing_layout_container(&self) -> bool {
        matches!(self, Self::MissingLayoutContainer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

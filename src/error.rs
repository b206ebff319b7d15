//! Error types for plugin registration and lookup.
//!
//! The sizing pass itself has no failure states: a missing header title or
//! cell value is measured as the empty string. Errors only arise from the
//! plugin registry.

use thiserror::Error;

/// Error type for plugin registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No plugin factory is registered under the requested type name.
    #[error("unknown plugin type: {0}")]
    UnknownPlugin(String),

    /// A plugin factory is already registered under this type name.
    #[error("plugin type already registered: {0}")]
    DuplicatePlugin(&'static str),
}

/// Result type alias using the crate Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownPlugin("rowheight".to_string());
        assert_eq!(format!("{}", err), "unknown plugin type: rowheight");

        let err = Error::DuplicatePlugin("autowidth");
        assert_eq!(
            format!("{}", err),
            "plugin type already registered: autowidth"
        );
    }
}

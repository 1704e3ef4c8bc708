//! Error types for window behavior

use thiserror::Error;

/// Errors surfaced by [`crate::Window`] operations
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WindowError {
    /// `set_size` was called with neither a width nor a height
    #[error("Neither width or height is provided!")]
    MissingDimensions,

    /// The bound element has no child matching the titlebar selector
    #[error("no titlebar element matches selector `{selector}`")]
    MissingTitlebar {
        /// Selector that matched nothing
        selector: String,
    },

    /// An option value is out of range
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption {
        /// Option key as seen by callers
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// The host environment rejected an operation
    #[error("host error: {0}")]
    Host(String),
}

impl WindowError {
    /// Create an invalid option error
    pub fn invalid_option(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            name,
            reason: reason.into(),
        }
    }
}

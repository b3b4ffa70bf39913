//! Startup errors.
//!
//! Everything here is fatal at initialization: the host aborts instead of
//! running a half-built scene.

/// Errors raised while loading data or initializing a game.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The data set as a whole is unusable (e.g. empty).
    #[error("invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// A single named entry failed validation.
    #[error("invalid body `{name}`: {reason}")]
    InvalidBody { name: String, reason: String },

    /// JSON input could not be parsed.
    #[error("failed to parse data: {0}")]
    Parse(#[from] serde_json::Error),

    /// `init` was called twice on the same runner.
    #[error("game already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = SetupError::InvalidBody {
            name: "Pluto".into(),
            reason: "negative radius".into(),
        };
        assert_eq!(err.to_string(), "invalid body `Pluto`: negative radius");
    }

    #[test]
    fn parse_errors_convert() {
        let err: SetupError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, SetupError::Parse(_)));
    }
}

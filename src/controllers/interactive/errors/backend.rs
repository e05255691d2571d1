use std::{error::Error, fmt};

/// Failure to bring up or drive the surface a frame is presented on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    ShaderCompileFailure { stage: String, log: String },
    BackendUnavailable { reason: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShaderCompileFailure { stage, log } => {
                write!(f, "{} stage failed to build: {}", stage, log)
            }
            Self::BackendUnavailable { reason } => {
                write!(f, "rendering backend unavailable: {}", reason)
            }
        }
    }
}

impl Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_stage() {
        let err = BackendError::ShaderCompileFailure {
            stage: "fragment".to_string(),
            log: "syntax error".to_string(),
        };

        assert_eq!(err.to_string(), "fragment stage failed to build: syntax error");
    }
}

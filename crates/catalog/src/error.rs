#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Item data unavailable: upstream responded with HTTP {status}: {message}")]
    DataUnavailable { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode item data: {0}")]
    Decode(String),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Preferences error: {0}")]
    Preferences(String),
}

impl From<catalog_core::preferences::PreferenceError> for Error {
    fn from(err: catalog_core::preferences::PreferenceError) -> Self {
        Error::Preferences(err.to_string())
    }
}

impl Error {
    /// Whether retrying the same request could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Network(_) => true,
            Error::DataUnavailable { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable(status: u16) -> Error {
        Error::DataUnavailable {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_is_transient() {
        assert!(Error::Network("connection refused".to_string()).is_transient());
        assert!(unavailable(429).is_transient());
        assert!(unavailable(503).is_transient());
        assert!(!unavailable(404).is_transient());
        assert!(!Error::Decode("expected value".to_string()).is_transient());
        assert!(!Error::NotFound("1".to_string()).is_transient());
    }
}

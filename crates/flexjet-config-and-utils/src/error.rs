use thiserror::Error;

/// Failure while locating, reading or validating local configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid API base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),

    /// A required directory could not be determined
    #[error("{0}")]
    Path(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_setting() {
        let err = CoreError::Config("request_timeout_secs must be greater than zero".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: request_timeout_secs must be greater than zero"
        );

        let err = CoreError::from(url::Url::parse("nope").unwrap_err());
        assert!(err.to_string().starts_with("invalid API base URL: "));
    }
}

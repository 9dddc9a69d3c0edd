//! Error types for the `domain` layer.
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors are modeled as a tree with `domain::error::Error` as the root type
/// holding an `error_kind` enum describing the kind of failure, while the
/// `source` field holds the original error that caused it. The intent is to
/// translate errors between layers while maintaining layer boundaries: `web`
/// depends on `domain` and uses the various `error_kind`s to return
/// appropriate HTTP status codes and messages to the client, without ever
/// depending on the gateways' transport errors directly.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    /// Malformed or missing caller input. Carries a message that is safe to
    /// surface to the caller.
    Validation(String),
    /// A required secret or setting is missing from the process configuration.
    Config,
    Other(String),
}

/// Enum representing the various kinds of external errors that can occur when
/// calling the completion provider.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    Network,
    Other(String),
}

impl Error {
    /// Shorthand for rejecting malformed caller input.
    pub fn validation(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Validation(message.into())),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Errors that result from issues building the reqwest::Client instance. This
        // type of error will occur prior to any network calls being made.
        if err.is_builder() {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Failed to build reqwest client".to_string(),
                )),
            }
        // Errors that result from issues with the network call itself.
        } else {
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_carries_message() {
        let err = Error::validation("Summary and recipients are required");

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Validation(
                "Summary and recipients are required".to_string()
            ))
        );
        assert!(err.source.is_none());
    }

    #[test]
    fn test_display_includes_error_kind() {
        let err = Error {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
        };

        assert!(err.to_string().contains("Network"));
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// Failures reported by the document store are not errors of this type. They are classified
/// into an [`UpdateOutcome`](crate::types::UpdateOutcome) instead.
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of pipeline errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The request carried no usable body (absent, empty, or not a JSON object)
    MissingBody,

    /// The `id` path parameter is absent or empty
    MissingIdentifier,

    /// The body decoded to an object with no attributes
    EmptyPatch,

    /// The request body could not be decoded
    MalformedBody,

    /// Client configuration is incomplete or invalid
    InvalidConfig,
}

impl Error {
    /// Creates a new pipeline [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// True if the request itself was at fault and no store call was attempted.
    pub fn is_client_input(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::MissingBody | ErrorKind::MissingIdentifier | ErrorKind::EmptyPatch
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::MissingBody => write!(f, "missing request body"),
            ErrorKind::MissingIdentifier => write!(f, "missing path parameter id"),
            ErrorKind::EmptyPatch => write!(f, "no attributes to update"),
            ErrorKind::MalformedBody => write!(f, "malformed request body"),
            ErrorKind::InvalidConfig => write!(f, "invalid configuration"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

pub(crate) fn missing_body<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::MissingBody, err)
}

pub(crate) fn missing_identifier() -> Error {
    Error::new(
        ErrorKind::MissingIdentifier,
        "path parameter `id` is absent or empty",
    )
}

pub(crate) fn empty_patch() -> Error {
    Error::new(ErrorKind::EmptyPatch, "request body has no attributes")
}

pub(crate) fn malformed_body<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::MalformedBody, err)
}

pub(crate) fn invalid_config<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InvalidConfig, err)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_client_input_kinds() {
        assert!(missing_body("absent").is_client_input());
        assert!(missing_identifier().is_client_input());
        assert!(empty_patch().is_client_input());
        assert!(!malformed_body("bad json").is_client_input());
        assert!(!invalid_config("no table").is_client_input());
    }

    #[test]
    fn test_source_is_preserved() {
        let err = invalid_config("TABLE_NAME is not set");
        assert_eq!("invalid configuration", err.to_string());
        assert_eq!(
            "TABLE_NAME is not set",
            err.source().expect("source").to_string()
        );
    }
}

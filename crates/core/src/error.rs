//! Error types for the colour-vision-deficiency core.

use thiserror::Error;

/// Errors produced by colour conversion, simulation and styling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColourError {
    /// A colour representation could not be decoded (bad hex, non-finite channel).
    #[error("invalid colour format: {0}")]
    InvalidColourFormat(String),

    /// A deficiency name was not one of protanopia, deuteranopia or tritanopia.
    #[error("unknown deficiency type: {0}")]
    UnknownDeficiencyType(String),

    /// The requested scheme is not present in the catalog.
    #[error("colour scheme \"{0}\" is not recognised")]
    UnknownScheme(String),

    /// A document type other than `report` or `presentation` was requested.
    #[error("unknown document type \"{0}\"")]
    InvalidDocumentType(String),

    /// A style lookup happened before the session was initialised.
    #[error("no scheme available: the style session must be initialised first")]
    SchemeNotInitialized,

    /// A scheme or catalog record could not be used (malformed JSON, too few colours).
    #[error("invalid scheme: {0}")]
    InvalidScheme(String),

    /// Reading a catalog or writing an output file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_colour_format_includes_message() {
        let err = ColourError::InvalidColourFormat("expected 6 hex digits".into());
        let msg = format!("{err}");
        assert!(msg.contains("6 hex digits"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_deficiency_includes_name() {
        let err = ColourError::UnknownDeficiencyType("achromatopsia".into());
        let msg = format!("{err}");
        assert!(msg.contains("achromatopsia"), "missing name in: {msg}");
    }

    #[test]
    fn unknown_scheme_includes_name() {
        let err = ColourError::UnknownScheme("sunburst".into());
        let msg = format!("{err}");
        assert!(
            msg.contains("sunburst") && msg.contains("not recognised"),
            "unexpected message: {msg}"
        );
    }

    #[test]
    fn invalid_document_type_includes_name() {
        let err = ColourError::InvalidDocumentType("poster".into());
        let msg = format!("{err}");
        assert!(msg.contains("poster"), "missing name in: {msg}");
    }

    #[test]
    fn scheme_not_initialized_mentions_initialisation() {
        let msg = format!("{}", ColourError::SchemeNotInitialized);
        assert!(msg.contains("initialised"), "unexpected message: {msg}");
    }

    #[test]
    fn invalid_scheme_and_io_include_message() {
        let scheme = format!("{}", ColourError::InvalidScheme("needs 2 colours".into()));
        assert!(scheme.contains("needs 2 colours"), "missing message in: {scheme}");
        let io = format!("{}", ColourError::Io("disk full".into()));
        assert!(io.contains("disk full"), "missing message in: {io}");
    }

    #[test]
    fn colour_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColourError>();
    }

    #[test]
    fn colour_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColourError>();
    }
}

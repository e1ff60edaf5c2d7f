use thiserror::Error;

/// Error types for the application
#[derive(Debug, Error)]
pub enum ExhumeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing required input: {0}")]
    Input(String),

    #[error(transparent)]
    Parse(#[from] crate::soap::ParseError),

    #[error(transparent)]
    Conversion(#[from] crate::soap::ConversionError),
}

/// Result type alias
pub type ExhumeResult<T> = Result<T, ExhumeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soap::{convert_soap_to_rest, ConversionOptions};

    #[test]
    fn input_error_carries_prefixed_message() {
        let err = ExhumeError::Input("WSDL file is empty".to_string());
        assert_eq!(err.to_string(), "missing required input: WSDL file is empty");
    }

    #[test]
    fn conversion_failures_convert_into_the_taxonomy() {
        let err = convert_soap_to_rest("<broken", &ConversionOptions::default()).unwrap_err();
        let err = ExhumeError::from(err);
        assert!(matches!(err, ExhumeError::Conversion(_)));
        assert!(err.to_string().contains("SOAP to REST conversion failed"));
    }

    #[test]
    fn parse_failures_convert_into_the_taxonomy() {
        let err = crate::soap::parse_wsdl("<definitions><unclosed>").unwrap_err();
        let err = ExhumeError::from(err);
        assert!(matches!(err, ExhumeError::Parse(_)));
        assert!(err.to_string().contains("failed to parse WSDL"));
    }
}

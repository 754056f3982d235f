use thiserror::Error;

/// Errors that can occur while turning user input into a recipe
#[derive(Error, Debug)]
pub enum ComposeError {
    /// No ingredients typed and no image supplied
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A user-facing value is outside its accepted range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Failed to read an image or write an exported document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Failures raised by a vision service.
///
/// These never leave the vision boundary: `vision::analyze_dish` converts
/// every variant into fallback data.
#[derive(Error, Debug)]
pub enum VisionError {
    /// The service rejected the request (bad image, bad credential)
    #[error("{0}")]
    InvalidArgument(String),

    /// Any other error reported by the service
    #[error("Vision API error ({code}): {message}")]
    Api { code: i64, message: String },

    /// Transport failure
    #[error("Failed to reach vision service: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered without any text
    #[error("Vision service returned no text")]
    EmptyResponse,
}

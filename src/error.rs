/// Error types for the application
///
/// Every runtime error travels inside a `Message`, so the variants carry
/// plain strings instead of the source errors and derive `Clone`.

use thiserror::Error;

/// Login form validation failures, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("All fields are required")]
    EmptyField,
    #[error("First name may only contain letters")]
    InvalidFirstName,
    #[error("Last name may only contain letters")]
    InvalidLastName,
    #[error("Password must be at least 6 characters")]
    WeakPassword,
}

/// Failures while fetching the photo list or an image
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Failures of the profile photo capture flow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("capture failed: {0}")]
    Failed(String),
}

impl From<image::ImageError> for CaptureError {
    fn from(err: image::ImageError) -> Self {
        CaptureError::Failed(err.to_string())
    }
}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        CaptureError::Failed(err.to_string())
    }
}

/// Failures reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_errors_name_the_field() {
        assert_eq!(
            LoginError::InvalidFirstName.to_string(),
            "First name may only contain letters"
        );
        assert_eq!(
            LoginError::InvalidLastName.to_string(),
            "Last name may only contain letters"
        );
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(LoginError::EmptyField.to_string(), "All fields are required");
        assert_eq!(
            LoginError::WeakPassword.to_string(),
            "Password must be at least 6 characters"
        );
    }
}

use crate::http_client::response::Response;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Request failed with status code {}", .0.status)]
    Status(Response),
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn error_string(&self) -> String;
}

impl<T: HttpClientErrorChecker> From<T> for Error {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() || err.is_request() {
            Error::Network(err.error_string())
        } else {
            Error::InvalidRequest(err.error_string())
        }
    }
}

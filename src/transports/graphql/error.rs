#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request: {}", .0)]
    Http(#[from] reqwest::Error),
    #[error("{}", .0)]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
    #[error("HTTP request returned with response status: {}", .0)]
    ResponseNotOk(reqwest::StatusCode),
}

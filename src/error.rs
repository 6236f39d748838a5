use thiserror::Error;

/// Failure of a log collection, carrying the underlying error unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be built or the log stream could not be opened.
    #[error(transparent)]
    Open(#[from] kube::Error),
    /// Reading the stream or writing to the output failed mid-copy.
    #[error(transparent)]
    Copy(#[from] std::io::Error),
}

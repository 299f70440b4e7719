//! Error types for the API client.
//!
//! # Design
//! A call fails in exactly one of two ways: the request never completed
//! (`Transport`), or it completed but the body was not a JSON object
//! (`Decode`). HTTP status codes are not errors — whatever mapping the
//! server returned is handed to the caller as-is, whatever the status.

use std::fmt;

/// Errors returned by `Client::request` and the resource facades.
#[derive(Debug)]
pub enum Error {
    /// The request could not be completed: connection refused, timed out,
    /// or the connection dropped mid-exchange.
    Transport(String),

    /// The response body could not be decoded into a JSON object.
    Decode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(msg) => write!(f, "transport error: {msg}"),
            Error::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

//! Synchronous JSON-over-HTTP API client.
//!
//! # Overview
//! A `Client` holds a base address and a set of default headers; resource
//! facades (`Foo`, `Bar`) bind that client to a fixed endpoint path and
//! expose one method per HTTP verb. Parameters travel as a query string for
//! get/delete and as a JSON body for post/put/patch, and every response
//! comes back as the JSON object the server returned, shape preserved.
//!
//! # Design
//! - Request construction (`build_request`) and response decoding
//!   (`parse_response`) are deterministic and free of I/O; the network
//!   round-trip sits between them in one place.
//! - Headers are shared client state read at issuance, so facades on the
//!   same client always agree on the headers in effect.
//! - Exactly two failure modes: `Error::Transport` and `Error::Decode`.
//!   Calls block until one response or one error is available; no retries.

pub mod client;
pub mod error;
pub mod http;
pub mod params;
pub mod services;

pub use client::{Client, Response};
pub use error::Error;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use params::{ParamValue, Params};
pub use services::{Bar, Foo};

//! Resource facades: one thin wrapper per endpoint, one method per verb.
//!
//! Each facade binds a shared `&Client` to a fixed path and forwards the
//! caller's `Params` to `Client::request` unchanged. Facades hold no state
//! of their own, so every header configured on the client is picked up at
//! call time by every facade bound to it.

use crate::client::{Client, Response};
use crate::error::Error;
use crate::http::HttpMethod;
use crate::params::Params;

/// Facade for the `/foo` resource.
#[derive(Debug, Clone, Copy)]
pub struct Foo<'a> {
    client: &'a Client,
}

impl<'a> Foo<'a> {
    const PATH: &'static str = "/foo";

    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn get(&self, params: &Params) -> Result<Response, Error> {
        self.client.request(HttpMethod::Get, Self::PATH, params)
    }

    pub fn post(&self, params: &Params) -> Result<Response, Error> {
        self.client.request(HttpMethod::Post, Self::PATH, params)
    }

    pub fn put(&self, params: &Params) -> Result<Response, Error> {
        self.client.request(HttpMethod::Put, Self::PATH, params)
    }

    pub fn patch(&self, params: &Params) -> Result<Response, Error> {
        self.client.request(HttpMethod::Patch, Self::PATH, params)
    }

    pub fn delete(&self, params: &Params) -> Result<Response, Error> {
        self.client.request(HttpMethod::Delete, Self::PATH, params)
    }
}

/// Facade for the `/bar` resource.
#[derive(Debug, Clone, Copy)]
pub struct Bar<'a> {
    client: &'a Client,
}

impl<'a> Bar<'a> {
    const PATH: &'static str = "/bar";

    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn get(&self, params: &Params) -> Result<Response, Error> {
        self.client.request(HttpMethod::Get, Self::PATH, params)
    }

    pub fn post(&self, params: &Params) -> Result<Response, Error> {
        self.client.request(HttpMethod::Post, Self::PATH, params)
    }

    pub fn put(&self, params: &Params) -> Result<Response, Error> {
        self.client.request(HttpMethod::Put, Self::PATH, params)
    }

    pub fn patch(&self, params: &Params) -> Result<Response, Error> {
        self.client.request(HttpMethod::Patch, Self::PATH, params)
    }

    pub fn delete(&self, params: &Params) -> Result<Response, Error> {
        self.client.request(HttpMethod::Delete, Self::PATH, params)
    }
}

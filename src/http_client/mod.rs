use crate::{Request, Response, Result};

#[cfg(test)]
mod tests;

pub mod reqwest;

pub struct ClientConfig {
    pub ssl_check: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { ssl_check: true }
    }
}

impl ClientConfig {
    pub fn new(ssl_check: bool) -> Self {
        Self { ssl_check }
    }
}

pub trait HttpClient {
    fn create(config: ClientConfig) -> Result<Self>
    where
        Self: Sized;

    /// Sends `request` once. `Err` means no response came back at all; any status code,
    /// successful or not, is an `Ok`.
    fn execute(&self, request: &Request) -> Result<Response>;
}

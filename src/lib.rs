//! # threads-check
//!
//! threads-check asks the Threads "mentions" endpoint for a single account and reports whether
//! the call went through. It is meant to be run by hand after rotating a token, or from a
//! deploy script, to confirm the credentials in a `.env` file are still good.
//!
//! ## Configuration
//!
//! Three variables are required, either exported or written to a `.env` file:
//!
//! ```text,no_run
//! THREADS_API_BASE=https://graph.threads.net/v1.0
//! THREADS_ACCESS_TOKEN=THQWJ...
//! THREADS_USER_ID=1234567890
//! ```
//!
//! If any of them is missing or empty the program says so and exits before touching the network.
//!
//! ## Usage
//!
//! ```text,no_run
//! $ threads-check
//! Checking API endpoint: https://graph.threads.net/v1.0/1234567890/mentions...
//! API Check Successful:
//! {"data": []}
//! ```
//!
//! A rejected token shows the status and the raw body sent back by the server:
//!
//! ```text,no_run
//! $ threads-check
//! Checking API endpoint: https://graph.threads.net/v1.0/1234567890/mentions...
//! API Check Failed: 401 Client Error: Unauthorized for url: https://graph.threads.net/v1.0/1234567890/mentions
//! Response Status Code: 401
//! Response Body: {"error":"invalid token"}
//! ```
//!
//! The access token is only ever sent in the query string; it is stripped from everything
//! printed or logged.
//!
//! See `threads-check --help` for the remaining flags.

use anyhow::Context;
use log::{debug, info, warn};

use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::HttpClient;
use crate::output::Outputter;

pub use crate::config::{load_env_file, Config, ConfigError};
pub use crate::http_client::ClientConfig;
pub use crate::model::{CheckOutcome, Request, Response};

pub mod config;
pub mod http_client;
pub mod model;
pub mod output;

pub type Result<T> = anyhow::Result<T>;

pub struct Checker<'a> {
    client: Box<dyn HttpClient>,
    outputter: &'a mut dyn Outputter,
}

impl<'a> Checker<'a> {
    pub fn new(outputter: &'a mut dyn Outputter, config: ClientConfig) -> Result<Checker<'a>> {
        let client = Box::new(ReqwestHttpClient::create(config)?);
        Ok(Checker::with_client(client, outputter))
    }

    pub fn with_client(client: Box<dyn HttpClient>, outputter: &'a mut dyn Outputter) -> Checker<'a> {
        Checker { client, outputter }
    }

    /// Performs the one request against the mentions endpoint and reports it.
    ///
    /// Request failures are part of the returned [`CheckOutcome`]; an `Err` only means the
    /// report itself could not be written.
    pub fn check(&mut self, config: &Config) -> Result<CheckOutcome> {
        let request = Request::mentions(config);
        self.outputter
            .request(&request)
            .context("Failed outputting request")?;

        debug!("GET {}", request.target());
        let outcome = match self.client.execute(&request) {
            Ok(response) => {
                info!("{} answered with {}", request.target(), response.status);
                CheckOutcome::from_response(&request, response)
            }
            Err(err) => {
                warn!("no response from {}", request.target());
                CheckOutcome::TransportError {
                    detail: format!("{:#}", err),
                }
            }
        };

        self.outputter
            .outcome(&outcome)
            .context("Failed outputting check outcome")?;

        Ok(outcome)
    }
}

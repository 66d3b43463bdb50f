use std::fmt;

use crate::Config;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
}

impl Request {
    /// `{base}/{user_id}/mentions?access_token={token}`, interpolated as is.
    pub fn mentions(config: &Config) -> Request {
        let Config {
            api_base,
            access_token,
            user_id,
        } = config;
        Request {
            url: format!(
                "{}/{}/mentions?access_token={}",
                api_base, user_id, access_token
            ),
        }
    }

    /// The url without its query string. This is the only form that gets printed or logged.
    pub fn target(&self) -> &str {
        match self.url.split_once('?') {
            Some((target, _)) => target,
            None => &self.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status_code: u16,
    pub status: String,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Success {
        status_code: u16,
        body: serde_json::Value,
    },
    HttpError {
        status_code: u16,
        detail: String,
        body: String,
    },
    TransportError {
        detail: String,
    },
}

impl CheckOutcome {
    pub fn from_response(request: &Request, response: Response) -> CheckOutcome {
        let success = response.is_success();
        let Response {
            status_code,
            status,
            body,
        } = response;

        if !success {
            let class = StatusClass::of(status_code);
            let detail = match reason(&status) {
                Some(reason) => format!(
                    "{} {}: {} for url: {}",
                    status_code,
                    class,
                    reason,
                    request.target()
                ),
                None => format!("{} {} for url: {}", status_code, class, request.target()),
            };
            return CheckOutcome::HttpError {
                status_code,
                detail,
                body,
            };
        }

        match serde_json::from_str(&body) {
            Ok(document) => CheckOutcome::Success {
                status_code,
                body: document,
            },
            Err(e) => CheckOutcome::HttpError {
                status_code,
                detail: format!("Response body is not valid JSON: {}", e),
                body,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckOutcome::Success { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            CheckOutcome::Success { status_code, .. }
            | CheckOutcome::HttpError { status_code, .. } => Some(*status_code),
            CheckOutcome::TransportError { .. } => None,
        }
    }
}

enum StatusClass {
    Client,
    Server,
    Unexpected,
}

impl StatusClass {
    fn of(status_code: u16) -> StatusClass {
        match status_code {
            400..=499 => StatusClass::Client,
            500..=599 => StatusClass::Server,
            _ => StatusClass::Unexpected,
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = match *self {
            StatusClass::Client => "Client Error",
            StatusClass::Server => "Server Error",
            StatusClass::Unexpected => "Unexpected Status",
        };
        f.write_str(class)
    }
}

// "401 Unauthorized" -> "Unauthorized", "499" -> None
fn reason(status: &str) -> Option<&str> {
    match status.split_once(' ') {
        Some((_, reason)) if !reason.is_empty() => Some(reason),
        _ => None,
    }
}

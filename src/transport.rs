use log::debug;

use crate::error::Result;

pub const USER_AGENT: &str = concat!("cep-finder/", env!("CARGO_PKG_VERSION"));

/// Status and body of an HTTP response, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the GET requests issued by lookups.
///
/// Implementations return `Ok` for every response that arrived, including
/// 4xx and 5xx ones, and an error only when there is no response at all.
pub trait Transport {
    fn get(&self, url: &str) -> Result<TransportResponse>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<TransportResponse> {
        (**self).get(url)
    }
}

/// Blocking reqwest transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client
}

impl HttpTransport {
    pub fn new() -> Result<HttpTransport> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(HttpTransport { client })
    }

    /// Use a caller-built client, e.g. one with a timeout or a proxy.
    pub fn from_client(client: reqwest::blocking::Client) -> HttpTransport {
        HttpTransport { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<TransportResponse> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let success = resp.status().is_success();
        let body = match resp.text() {
            Ok(body) => body,
            // The status alone answers a failed lookup
            Err(err) if !success => {
                debug!("GET {} -> {}, body unreadable: {}", url, status, err);
                String::new()
            },
            Err(err) => return Err(err.into())
        };
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::{Transport, TransportResponse};
    use crate::error::{CepError, Result};

    /// Answers requests with canned responses, in order, repeating the last
    /// one. `None` stands for a request that got no response.
    #[derive(Debug)]
    pub(crate) struct StubTransport {
        responses: RefCell<VecDeque<Option<TransportResponse>>>,
        pub requests: RefCell<Vec<String>>
    }

    impl StubTransport {
        pub fn respond(status: u16, body: &str) -> StubTransport {
            StubTransport::start(Some(TransportResponse { status, body: body.to_owned() }))
        }

        pub fn unreachable() -> StubTransport {
            StubTransport::start(None)
        }

        pub fn then(self, status: u16, body: &str) -> StubTransport {
            self.responses
                .borrow_mut()
                .push_back(Some(TransportResponse { status, body: body.to_owned() }));
            self
        }

        fn start(response: Option<TransportResponse>) -> StubTransport {
            StubTransport {
                responses: RefCell::new(vec![response].into()),
                requests: RefCell::new(Vec::new())
            }
        }
    }

    impl Transport for StubTransport {
        fn get(&self, url: &str) -> Result<TransportResponse> {
            self.requests.borrow_mut().push(url.to_owned());

            let mut responses = self.responses.borrow_mut();
            let response = if responses.len() > 1 {
                responses.pop_front().flatten()
            } else {
                responses.front().cloned().flatten()
            };

            response.ok_or_else(|| CepError::Transport {
                status: None,
                source: Box::new("dns error: no such host")
            })
        }
    }
}

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use superchief::{
    endpoint::{Endpoint, Kind, Requirement},
    request::Prepared,
    transport::{Reply, Transport},
    Client, Error, Params,
};

/// Transport that records every request and answers with a canned reply.
#[derive(Debug, Clone)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<Prepared>>>,
    reply: Option<Reply>,
}

impl Recorder {
    /// Answers every request with `status` and `body`.
    pub fn replying(status: u16, body: &str) -> Self {
        Recorder {
            requests: Arc::default(),
            reply: Some(Reply {
                status,
                body: body.to_string(),
            }),
        }
    }

    /// Fails every request as if the connection was refused.
    pub fn failing() -> Self {
        Recorder {
            requests: Arc::default(),
            reply: None,
        }
    }

    pub fn requests(&self) -> Vec<Prepared> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// A keyed client on top of this recorder.
    pub fn client(&self) -> Client {
        Client::builder()
            .api_key("test-key")
            .base_url("https://services.test")
            .haste_url("https://haste.test")
            .transport(self.clone())
            .build()
            .unwrap()
    }
}

#[async_trait]
impl Transport for Recorder {
    async fn execute(&self, request: Prepared) -> superchief::Result<Reply> {
        self.requests.lock().unwrap().push(request);
        self.reply
            .clone()
            .ok_or_else(|| Error::NoResponse("connection refused".to_string()))
    }
}

/// Arguments satisfying every requirement of `endpoint`.
pub fn valid_params(endpoint: &Endpoint) -> Params {
    let mut params = Params::new();
    for param in endpoint.params {
        match param.requirement {
            Requirement::Required(_) | Requirement::RequiredUnless { .. } => {
                if param.kind == Kind::Number {
                    params.insert(param.name, 7);
                } else {
                    params.insert(param.name, "x");
                }
            }
            _ => {}
        }
    }
    params
}

/// The failure message `endpoint` reports for `params` when the service
/// does not answer.
pub fn expected_failure(endpoint: &Endpoint, params: &Params) -> String {
    endpoint
        .no_response
        .render(|name| params.get(name).map(ToString::to_string))
}

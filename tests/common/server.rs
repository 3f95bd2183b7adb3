//! Local HTTP server standing in for the GraphQL API and the chat webhook
//!
//! - `POST /graphql` answers with queued responses in order, then with an
//!   empty history page.
//! - `POST /webhook` answers with the configured status.

use std::collections::VecDeque;
use std::io::Read as _;
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::Value;
use tiny_http::{Header, Response, Server};

use super::fixtures::history_response;

/// A request received by the server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub body: Value,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
}

/// Builder for [`FakeServer`]
pub struct FakeServerBuilder {
    graphql: VecDeque<(u16, Value)>,
    webhook_status: u16,
}

impl FakeServerBuilder {
    /// Queue a successful history page
    pub fn page(self, commits: Vec<Value>) -> Self {
        self.graphql_response(200, history_response(commits))
    }

    /// Queue an arbitrary GraphQL response
    pub fn graphql_response(mut self, status: u16, body: Value) -> Self {
        self.graphql.push_back((status, body));
        self
    }

    /// Status returned by the webhook endpoint
    pub fn webhook_status(mut self, status: u16) -> Self {
        self.webhook_status = status;
        self
    }

    pub fn start(self) -> FakeServer {
        let server = Server::http("127.0.0.1:0").expect("Failed to bind test server");
        let port = server.server_addr().to_ip().expect("TCP listener").port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let mut graphql = self.graphql;
        let webhook_status = self.webhook_status;
        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let header = |name: &str| {
                    request
                        .headers()
                        .iter()
                        .find(|h| h.field.to_string().eq_ignore_ascii_case(name))
                        .map(|h| h.value.to_string())
                };
                let path = request.url().to_string();
                let entry = RecordedRequest {
                    path: path.clone(),
                    body: serde_json::from_str(&body).unwrap_or(Value::Null),
                    authorization: header("Authorization"),
                    user_agent: header("User-Agent"),
                };
                recorded.lock().unwrap().push(entry);

                let (status, payload) = match path.as_str() {
                    "/graphql" => graphql
                        .pop_front()
                        .unwrap_or_else(|| (200, history_response(Vec::new()))),
                    "/webhook" => (webhook_status, Value::Null),
                    _ => (404, Value::Null),
                };
                let text = if payload.is_null() { String::new() } else { payload.to_string() };
                let content_type =
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
                let _ = request.respond(
                    Response::from_string(text).with_status_code(status).with_header(content_type),
                );
            }
        });

        FakeServer {
            base: format!("http://127.0.0.1:{port}"),
            requests,
        }
    }
}

/// Running fake server; the listener thread lives until the test process exits
pub struct FakeServer {
    base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeServer {
    pub fn builder() -> FakeServerBuilder {
        FakeServerBuilder {
            graphql: VecDeque::new(),
            webhook_status: 204,
        }
    }

    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base)
    }

    pub fn webhook_url(&self) -> String {
        format!("{}/webhook", self.base)
    }

    /// Requests received on `path`, in arrival order
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().iter().filter(|r| r.path == path).cloned().collect()
    }
}

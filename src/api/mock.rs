//! In-process mock backend for client and loader tests.
//!
//! Serves canned `(path, status, body)` routes over `tiny_http` on an
//! ephemeral loopback port. Unknown paths get a plain-text 404.

use std::io::Read;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string, as received.
    pub url: String,
    pub body: String,
}

pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub fn start(routes: &[(&str, u16, &str)]) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock backend");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("mock backend has an IP address");
        let routes: Vec<(String, u16, String)> = routes
            .iter()
            .map(|(p, s, b)| (p.to_string(), *s, b.to_string()))
            .collect();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        std::thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let url = request.url().to_string();
                let path = url.split('?').next().unwrap_or_default().to_string();

                if let Ok(mut log) = log.lock() {
                    log.push(RecordedRequest {
                        method: request.method().to_string(),
                        url,
                        body,
                    });
                }

                let (status, content_type, text) = routes
                    .iter()
                    .find(|(p, _, _)| *p == path)
                    .map(|(_, s, b)| (*s, "application/json", b.clone()))
                    .unwrap_or((404, "text/plain", "404 Not Found\n".to_string()));

                let response = tiny_http::Response::from_string(text)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", content_type)
                            .expect("static header is valid"),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

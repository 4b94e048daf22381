#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use whois_relay::application::services::WhoisService;
use whois_relay::domain::clients::WhoisClient;
use whois_relay::domain::errors::WhoisError;
use whois_relay::domain::reply::WhoisReply;
use whois_relay::routes::app_router;
use whois_relay::state::AppState;

pub const IANA: &str = "whois.iana.org";
pub const VERISIGN: &str = "whois.verisign-grs.com";

/// What a stubbed server does for one `(server, query)` pair.
#[derive(Clone)]
enum Outcome {
    Reply(Vec<u8>),
    Reset,
}

/// In-memory [`WhoisClient`] answering from a fixed table.
///
/// Unknown `(server, query)` pairs fail like an unreachable host.
#[derive(Default)]
pub struct StubWhoisClient {
    outcomes: HashMap<(String, String), Outcome>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubWhoisClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, server: &str, query: &str, body: impl Into<Vec<u8>>) -> Self {
        self.outcomes.insert(
            (server.to_string(), query.to_string()),
            Outcome::Reply(body.into()),
        );
        self
    }

    pub fn reset(mut self, server: &str, query: &str) -> Self {
        self.outcomes
            .insert((server.to_string(), query.to_string()), Outcome::Reset);
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WhoisClient for StubWhoisClient {
    async fn query(&self, server: &str, query: &str) -> Result<WhoisReply, WhoisError> {
        self.calls
            .lock()
            .unwrap()
            .push((server.to_string(), query.to_string()));

        match self.outcomes.get(&(server.to_string(), query.to_string())) {
            Some(Outcome::Reply(body)) => Ok(WhoisReply::new(body.clone())),
            Some(Outcome::Reset) => Err(WhoisError::Io(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            ))),
            None => Err(WhoisError::Connection {
                addr: format!("{server}:43"),
                source: io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
            }),
        }
    }
}

/// Stub with the `.com` referral and the `example.com` record in place.
pub fn com_stub() -> StubWhoisClient {
    StubWhoisClient::new()
        .reply(IANA, "com", "whois: whois.verisign-grs.com\n")
        .reply(VERISIGN, "example.com", "Domain Name: EXAMPLE.COM\n...")
}

pub fn create_test_state(client: Arc<dyn WhoisClient>) -> AppState {
    let whois_service = WhoisService::new(client, IANA);
    AppState::new(Arc::new(whois_service))
}

pub fn create_test_server(client: Arc<dyn WhoisClient>) -> TestServer {
    TestServer::new(app_router(create_test_state(client))).unwrap()
}

/// Spawns a WHOIS server on 127.0.0.1 answering each connection from `table`
/// (query line without CRLF -> reply). Unknown queries get an empty reply.
/// Returns the bound port.
pub async fn spawn_whois_server(table: HashMap<String, Vec<u8>>) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let table = Arc::new(table);

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let table = table.clone();

            tokio::spawn(async move {
                let mut line = String::new();
                {
                    let mut reader = BufReader::new(&mut stream);
                    if reader.read_line(&mut line).await.is_err() {
                        return;
                    }
                }

                let query = line.trim_end_matches(['\r', '\n']);
                if let Some(reply) = table.get(query) {
                    let _ = stream.write_all(reply).await;
                }
            });
        }
    });

    port
}

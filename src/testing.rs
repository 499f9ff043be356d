//! In-process HTTP stub standing in for PokeAPI in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::config::ApiConfig;
use crate::pokeapi::PokeApiClient;

/// Canned reply for one request path.
#[derive(Debug, Clone)]
pub enum Reply {
    Status(u16, String),
    /// Accept the connection and never answer.
    Hang,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::Status(200, body.into())
    }
}

/// Minimal HTTP/1.1 server answering from a fixed route table. Unknown
/// paths get a 404 with PokeAPI's plain-text body.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Start serving `routes`, keyed by path relative to the base URL
    /// (e.g. `/pokemon/charizard`).
    pub async fn start(routes: Vec<(&str, Reply)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_path = "/api/v2";

        let routes: Arc<HashMap<String, Reply>> = Arc::new(
            routes
                .into_iter()
                .map(|(path, reply)| (format!("{}{}", base_path, path), reply))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                let seen = seen.clone();
                tokio::spawn(async move {
                    handle(stream, &routes, &seen).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}{}", addr, base_path),
            requests,
        }
    }

    /// Paths requested so far, in arrival order, with the base path stripped.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
        }
    }

    pub fn client(&self) -> PokeApiClient {
        PokeApiClient::new(&self.api_config()).unwrap()
    }
}

async fn handle(mut stream: TcpStream, routes: &HashMap<String, Reply>, seen: &Mutex<Vec<String>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buf);
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    seen.lock()
        .unwrap()
        .push(path.strip_prefix("/api/v2").unwrap_or(&path).to_string());

    let (status, body) = match routes.get(&path) {
        Some(Reply::Status(status, body)) => (*status, body.clone()),
        Some(Reply::Hang) => {
            tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
            return;
        }
        None => (404, "Not Found".to_string()),
    };

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/v2", addr)
}

/// A PokeAPI-shaped body with the given fields.
pub fn pokemon_body(name: &str, types: &[&str], abilities: &[&str], stats: &[(&str, i64)]) -> String {
    json!({
        "id": 1,
        "name": name,
        "stats": stats
            .iter()
            .map(|(stat, value)| json!({"base_stat": value, "effort": 0, "stat": {"name": stat, "url": ""}}))
            .collect::<Vec<_>>(),
        "types": types
            .iter()
            .enumerate()
            .map(|(i, t)| json!({"slot": i + 1, "type": {"name": t, "url": ""}}))
            .collect::<Vec<_>>(),
        "abilities": abilities
            .iter()
            .enumerate()
            .map(|(i, a)| json!({"ability": {"name": a, "url": ""}, "is_hidden": false, "slot": i + 1}))
            .collect::<Vec<_>>(),
    })
    .to_string()
}

/// Charizard as PokeAPI returns it (consumed fields only).
pub fn charizard_body() -> String {
    pokemon_body(
        "charizard",
        &["fire", "flying"],
        &["blaze", "solar-power"],
        &[
            ("hp", 78),
            ("attack", 84),
            ("defense", 78),
            ("special-attack", 109),
            ("special-defense", 85),
            ("speed", 100),
        ],
    )
}

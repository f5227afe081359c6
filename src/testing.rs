// src/testing.rs
// =============================================================================
// Test helpers: a tiny in-process HTTP server standing in for the order
// service.
//
// It answers every request with the same status and body, and remembers the
// request path of each request so tests can check what was sent.
// =============================================================================

use reqwest::StatusCode;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

pub struct StubServer {
    pub base: Url,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Starts a server on a random local port answering `status` with `body`.
    pub async fn start(status: u16, body: &'static str) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let seen = Arc::clone(&seen);
                tokio::spawn(async move {
                    let _ = answer(socket, status, body, seen).await;
                });
            }
        });

        StubServer {
            base: Url::parse(&format!("http://{}", addr)).unwrap(),
            requests,
        }
    }

    /// Base URL of a port nobody listens on, so connections are refused.
    pub async fn closed_base() -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        Url::parse(&format!("http://{}", addr)).unwrap()
    }

    /// Request paths received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn answer(
    mut socket: TcpStream,
    status: u16,
    body: &str,
    seen: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    // Read until the end of the request head, GET requests carry no body
    let mut buf = vec![0u8; 8192];
    let mut read = 0;
    loop {
        let n = socket.read(&mut buf[read..]).await?;
        if n == 0 {
            break;
        }
        read += n;
        if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") || read == buf.len() {
            break;
        }
    }

    let head = String::from_utf8_lossy(&buf[..read]);
    if let Some(path) = head.lines().next().and_then(|line| line.split_whitespace().nth(1)) {
        seen.lock().unwrap().push(path.to_string());
    }

    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown");
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

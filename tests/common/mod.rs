//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use movie_gateway::config::Settings;
use movie_gateway::http::HttpServer;
use movie_gateway::lifecycle::Shutdown;

/// Start the gateway on an ephemeral port and return its address plus the
/// shutdown handle.
pub async fn start_gateway(settings: Settings) -> (SocketAddr, Shutdown) {
    let shutdown = Shutdown::new();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(Arc::new(settings));
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// Settings pointing at a mock upstream.
pub fn settings_for(upstream: SocketAddr) -> Settings {
    let mut settings = Settings::default();
    settings.upstream.base_url = format!("http://{upstream}/");
    settings.upstream.api_key = "testkey".to_string();
    settings
}

/// A client that ignores any ambient proxy configuration.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Start a programmable mock upstream on an ephemeral port.
///
/// The closure receives the request target exactly as sent on the wire
/// (path and query, no decoding) and returns (status, content type, body).
#[allow(dead_code)]
pub async fn start_programmable_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let target = read_request_target(&mut socket).await;
                        let (status, content_type, body) = f(target).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            content_type,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Read the head of an HTTP/1.1 request and return its target.
#[allow(dead_code)]
async fn read_request_target(socket: &mut TcpStream) -> String {
    let mut buf = vec![0u8; 8192];
    let mut filled = 0;
    loop {
        let n = socket.read(&mut buf[filled..]).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        filled += n;
        if buf[..filled].windows(4).any(|window| window == b"\r\n\r\n") {
            break;
        }
        if filled == buf.len() {
            break;
        }
    }

    let head = String::from_utf8_lossy(&buf[..filled]);
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string()
}

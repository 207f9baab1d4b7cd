#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::{Ipv4Addr, SocketAddr, TcpListener as StdListener};
use std::process::{Command, Stdio};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use guides_admin::app_state::AppState;
use guides_admin::config::AdminConfig;
use guides_admin::server;

const BIN: &str = env!("CARGO_BIN_EXE_guides-admin");

async fn http_get(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.unwrap();
    let mut out = String::new();
    stream.read_to_string(&mut out).await.unwrap();
    out
}

fn free_port() -> u16 {
    StdListener::bind((Ipv4Addr::LOCALHOST, 0))
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[test]
fn missing_port_exits_before_listening() {
    let out = Command::new(BIN)
        .env_remove("PORT")
        .env("RUST_LOG", "error")
        .output()
        .unwrap();

    assert!(!out.status.success());
    let log = format!(
        "{}{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(log.contains("$PORT must be set"), "log: {log}");
}

#[test]
fn invalid_port_exits_non_zero() {
    let status = Command::new(BIN)
        .env("PORT", "not-a-port")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(!status.success());
}

#[tokio::test]
async fn binary_accepts_connections_on_the_configured_port() {
    let port = free_port();
    let mut child = Command::new(BIN)
        .env("PORT", port.to_string())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    let mut connected = false;
    for _ in 0..100 {
        if TcpStream::connect(addr).await.is_ok() {
            connected = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    let resp = if connected { Some(http_get(addr, "/health").await) } else { None };
    child.kill().unwrap();
    let _ = child.wait();

    let resp = resp.expect("admin server never accepted a connection");
    assert!(resp.starts_with("HTTP/1.1 200"), "response: {resp}");
}

#[tokio::test]
async fn served_listener_answers_both_routes() {
    let listener = server::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::new(AdminConfig { port: addr.port() }).unwrap();
    tokio::spawn(server::serve(listener, state.clone()));

    let health = http_get(addr, "/health").await;
    assert!(health.starts_with("HTTP/1.1 200"), "response: {health}");

    let metrics = http_get(addr, "/metrics").await;
    assert!(metrics.starts_with("HTTP/1.1 200"), "response: {metrics}");
    let body = metrics.split("\r\n\r\n").nth(1).unwrap();
    assert!(body.starts_with("{\"system\":"), "body: {body}");

    assert_eq!(state.hits().count(), 2);
}

#[tokio::test]
async fn bind_conflict_is_a_fatal_error() {
    let held = server::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .unwrap();
    let addr = held.local_addr().unwrap();

    let err = server::bind(addr).await.expect_err("port already taken");
    assert!(err.is_fatal());
}

//! Filesystem contract tests for the artifact download.
//!
//! Failure paths run against refused local connections; success paths run
//! against a single-shot HTTP listener, so nothing here touches the real
//! network.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use hostsedit_core::paths::artifact_path_in;
use hostsedit_runtime::fetch::download_artifact;

/// Bind an ephemeral port, then drop the listener so connections to the
/// address are refused.
async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}

/// Serve each body once as an HTTP/1.1 200 response, then stop.
async fn serve_bodies(bodies: Vec<&'static [u8]>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        for body in bodies {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.write_all(body).await;
            let _ = socket.shutdown().await;
        }
    });
    addr
}

/// Serve one response with the given status line and an empty body.
async fn serve_status_once(status_line: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        let response = format!("{status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });
    addr
}

#[tokio::test]
async fn refused_connection_writes_nothing() {
    let staging = tempfile::tempdir().expect("tempdir");
    let dest = artifact_path_in(staging.path());
    let addr = refused_addr().await;

    let result = download_artifact(&format!("http://{addr}/hosts_editor.py"), &dest).await;

    assert!(result.is_err());
    assert!(!dest.exists(), "a failed download must not create the file");
}

#[tokio::test]
async fn refused_connection_leaves_prior_copy_untouched() {
    let staging = tempfile::tempdir().expect("tempdir");
    let dest = artifact_path_in(staging.path());
    std::fs::write(&dest, b"# previous editor\n").expect("seed file");
    let addr = refused_addr().await;

    let result = download_artifact(&format!("http://{addr}/hosts_editor.py"), &dest).await;

    assert!(result.is_err());
    let kept = std::fs::read(&dest).expect("prior copy");
    assert_eq!(kept, b"# previous editor\n");
}

#[tokio::test]
async fn error_status_fails_without_touching_the_prior_copy() {
    let staging = tempfile::tempdir().expect("tempdir");
    let dest = artifact_path_in(staging.path());
    std::fs::write(&dest, b"# keep me\n").expect("seed file");
    let addr = serve_status_once("HTTP/1.1 404 Not Found").await;

    let err = download_artifact(&format!("http://{addr}/hosts_editor.py"), &dest)
        .await
        .expect_err("404 must fail");

    assert!(err.to_string().contains("404"));
    assert_eq!(std::fs::read(&dest).expect("prior copy"), b"# keep me\n");
}

#[tokio::test]
async fn download_writes_the_body_and_reports_its_size() {
    const BODY: &[u8] = b"#!/usr/bin/env python3\nprint('hosts editor')\n";
    let staging = tempfile::tempdir().expect("tempdir");
    let dest = artifact_path_in(staging.path());
    let addr = serve_bodies(vec![BODY]).await;

    let written = download_artifact(&format!("http://{addr}/hosts_editor.py"), &dest)
        .await
        .expect("download");

    assert_eq!(written, BODY.len() as u64);
    assert_eq!(std::fs::read(&dest).expect("artifact"), BODY);
}

#[tokio::test]
async fn second_download_overwrites_in_place() {
    let staging = tempfile::tempdir().expect("tempdir");
    let dest = artifact_path_in(staging.path());
    let addr = serve_bodies(vec![b"# version one\n", b"# version two, longer\n"]).await;
    let url = format!("http://{addr}/hosts_editor.py");

    download_artifact(&url, &dest).await.expect("first download");
    download_artifact(&url, &dest).await.expect("second download");

    assert_eq!(
        std::fs::read(&dest).expect("artifact"),
        b"# version two, longer\n"
    );
    let entries = std::fs::read_dir(staging.path()).expect("read dir").count();
    assert_eq!(entries, 1, "overwrites must not leave extra files behind");
}

//! In-process HTTP receivers and async helpers for unit tests.
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use url::Url;

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos.saturating_add(4))
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Reads one full request (head plus `Content-Length` body).
pub(crate) async fn read_request(stream: &mut TcpStream) -> Result<Vec<u8>, String> {
    let mut received = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        if let Some(end) = find_header_end(&received) {
            let head = String::from_utf8_lossy(received.get(..end).unwrap_or_default());
            let expected = end.saturating_add(content_length(&head));
            if received.len() >= expected {
                return Ok(received);
            }
        }
        let read = stream
            .read(&mut chunk)
            .await
            .map_err(|err| format!("read failed: {}", err))?;
        if read == 0 {
            return Ok(received);
        }
        received.extend_from_slice(chunk.get(..read).unwrap_or_default());
    }
}

fn canned_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    )
}

async fn write_raw(stream: &mut TcpStream, response: &str) -> Result<(), String> {
    stream
        .write_all(response.as_bytes())
        .await
        .map_err(|err| format!("write failed: {}", err))?;
    drop(stream.shutdown().await);
    Ok(())
}

async fn write_response(
    stream: &mut TcpStream,
    status_line: &str,
    body: &str,
) -> Result<(), String> {
    write_raw(stream, &canned_response(status_line, body)).await
}

async fn bind_local() -> Result<(TcpListener, Url), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("local_addr failed: {}", err))?;
    let url = Url::parse(&format!("http://{}/ingest", addr))
        .map_err(|err| format!("url failed: {}", err))?;
    Ok((listener, url))
}

/// Serves one connection with a canned response and hands back the raw request.
pub(crate) async fn spawn_canned_server(
    status_line: &'static str,
    body: &'static str,
) -> Result<(Url, JoinHandle<Result<Vec<u8>, String>>), String> {
    let (listener, url) = bind_local().await?;
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener
            .accept()
            .await
            .map_err(|err| format!("accept failed: {}", err))?;
        let request = read_request(&mut stream).await?;
        write_response(&mut stream, status_line, body).await?;
        Ok(request)
    });
    Ok((url, handle))
}

/// Serves one connection with `response` written verbatim, then closes it.
pub(crate) async fn spawn_raw_server(
    response: &'static str,
) -> Result<(Url, JoinHandle<Result<Vec<u8>, String>>), String> {
    let (listener, url) = bind_local().await?;
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener
            .accept()
            .await
            .map_err(|err| format!("accept failed: {}", err))?;
        let request = read_request(&mut stream).await?;
        write_raw(&mut stream, response).await?;
        Ok(request)
    });
    Ok((url, handle))
}

/// Answers every connection with the same response and counts requests.
pub(crate) struct CountingServer {
    pub url: Url,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl CountingServer {
    pub(crate) async fn spawn(status_line: &'static str, body: &'static str) -> Result<Self, String> {
        let (listener, url) = bind_local().await?;
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let handle = tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let counter = Arc::clone(&counter);
                tokio::spawn(async move {
                    if read_request(&mut stream).await.is_ok() {
                        counter.fetch_add(1, Ordering::SeqCst);
                        drop(write_response(&mut stream, status_line, body).await);
                    }
                });
            }
        });
        Ok(Self { url, hits, handle })
    }

    pub(crate) fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for CountingServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A URL on a local port nothing listens on.
pub(crate) async fn refused_url() -> Result<Url, String> {
    let (listener, url) = bind_local().await?;
    drop(listener);
    Ok(url)
}

// src/net.rs
// Very minimal HTTP GET over plain TCP, no TLS.
// Uses HTTP/1.0 so the server closes the connection at the end (no chunked transfer).

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::error::FeedError;

/// Fetch the current full feed document as text.
///
/// * `host` – hostname (no protocol, no port)
/// * `port` – usually 80 for HTTP
/// * `path` – path + query string starting with `/`
///
/// Any transport problem or non-200 status surfaces as
/// [`FeedError::Unreachable`]; the body is never partially returned.
pub fn http_get(host: &str, port: u16, path: &str) -> Result<String, FeedError> {
    let unreachable = |e: std::io::Error| FeedError::Unreachable(e.to_string());

    // Connect and set reasonable timeouts
    let mut stream = TcpStream::connect((host, port)).map_err(unreachable)?;
    stream.set_read_timeout(Some(Duration::from_secs(15))).map_err(unreachable)?;
    stream.set_write_timeout(Some(Duration::from_secs(15))).map_err(unreachable)?;

    // Send GET request
    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: taskfeed/0.1\r\nConnection: close\r\n\r\n",
        path, host
    );
    stream.write_all(req.as_bytes()).map_err(unreachable)?;
    stream.flush().map_err(unreachable)?;

    // Read the entire response
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).map_err(unreachable)?;
    let resp = String::from_utf8_lossy(&buf);

    // Basic status check
    let status_line_end = resp.find("\r\n").unwrap_or(0);
    let status = &resp[..status_line_end];
    if !status.contains("200") {
        return Err(FeedError::Unreachable(format!("HTTP error: {}", status)));
    }

    // Split off the body
    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| FeedError::Unreachable(s!("Malformed HTTP response")))?
        + 4;
    Ok(resp[body_idx..].to_string())
}

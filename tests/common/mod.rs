//! Canned-response HTTP server for integration tests

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};
use untappd::Client;

/// One canned HTTP response
pub struct Reply {
    pub status: u16,
    pub rate_limit: Option<&'static str>,
    pub body: String,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            rate_limit: Some("99"),
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            rate_limit: None,
            body: body.to_string(),
        }
    }
}

/// Serves each reply to one connection, in order, then stops.
pub struct MockServer {
    addr: SocketAddr,
    handle: JoinHandle<Vec<String>>,
}

impl MockServer {
    pub fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let mut requests = Vec::new();
            for reply in replies {
                let (mut stream, _) = listener.accept().unwrap();
                requests.push(read_request_line(&mut stream));

                let mut head = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
                    reply.status,
                    if reply.status == 200 { "OK" } else { "Error" },
                    reply.body.len()
                );
                if let Some(remaining) = reply.rate_limit {
                    head.push_str(&format!("X-Ratelimit-Remaining: {remaining}\r\n"));
                }
                head.push_str("\r\n");

                stream.write_all(head.as_bytes()).unwrap();
                stream.write_all(reply.body.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
            requests
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/v4/", self.addr)
    }

    /// Client pointed at this server, bypassing any proxy settings
    pub fn client(&self) -> Client {
        let http = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap();
        Client::builder("test-id", "test-secret")
            .base_url(&self.base_url())
            .http_client(http)
            .build()
            .unwrap()
    }

    /// Wait for every reply to be served and return the request lines seen
    pub fn requests(self) -> Vec<String> {
        self.handle.join().unwrap()
    }
}

fn read_request_line(stream: &mut impl Read) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&data)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Path and query of a request line such as `GET /v4/x?a=b HTTP/1.1`
pub fn target(request_line: &str) -> &str {
    request_line.split(' ').nth(1).unwrap_or_default()
}

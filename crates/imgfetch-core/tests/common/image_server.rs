//! Minimal HTTP/1.1 server that answers HEAD and GET for integration tests.
//!
//! Serves a fixed set of routes keyed by request path. Every response closes
//! the connection. GET requests are counted per path so tests can assert that
//! a rejected URL was never downloaded.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    /// `Content-Type` header; omitted when `None`.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    /// Overrides the `Content-Length` sent on HEAD. `Some(None)` omits the header.
    pub head_length: Option<Option<u64>>,
    /// `Location` header sent with a 3xx `status`.
    pub location: Option<String>,
    /// When set, GET (but not HEAD) answers `302` to this location.
    pub get_redirect: Option<String>,
    /// Accept the connection and never answer.
    pub stall: bool,
}

impl Route {
    pub fn image(content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type.to_string()),
            body,
            head_length: None,
            location: None,
            get_redirect: None,
            stall: false,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: Some("text/plain".to_string()),
            body: b"nope".to_vec(),
            head_length: None,
            location: None,
            get_redirect: None,
            stall: false,
        }
    }

    pub fn redirect(to: &str) -> Self {
        Self {
            location: Some(to.to_string()),
            ..Self::status(302)
        }
    }

    pub fn stalled() -> Self {
        Self {
            stall: true,
            ..Self::status(200)
        }
    }

    pub fn with_get_redirect(mut self, to: &str) -> Self {
        self.get_redirect = Some(to.to_string());
        self
    }

    pub fn with_head_length(mut self, len: Option<u64>) -> Self {
        self.head_length = Some(len);
        self
    }
}

pub struct ImageServer {
    base: String,
    gets: Arc<HashMap<String, AtomicUsize>>,
}

impl ImageServer {
    /// Full URL for `path` (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Number of GET requests served for `path`.
    pub fn gets(&self, path: &str) -> usize {
        self.gets
            .get(path)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> ImageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let gets: Arc<HashMap<String, AtomicUsize>> = Arc::new(
        routes
            .iter()
            .map(|(p, _)| (p.to_string(), AtomicUsize::new(0)))
            .collect(),
    );
    let routes: Arc<HashMap<String, Route>> =
        Arc::new(routes.into_iter().map(|(p, r)| (p.to_string(), r)).collect());
    let counters = Arc::clone(&gets);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let counters = Arc::clone(&counters);
            thread::spawn(move || handle(stream, &routes, &counters));
        }
    });
    ImageServer {
        base: format!("http://127.0.0.1:{}", port),
        gets,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    gets: &HashMap<String, AtomicUsize>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    let path = path.split('?').next().unwrap_or(path);

    let route = match routes.get(path) {
        Some(r) => r,
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
            return;
        }
    };

    if route.stall {
        thread::sleep(std::time::Duration::from_secs(4));
        return;
    }

    let location = route
        .location
        .as_deref()
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let content_type = route
        .content_type
        .as_deref()
        .map(|ct| format!("Content-Type: {}\r\n", ct))
        .unwrap_or_default();

    if method.eq_ignore_ascii_case("HEAD") {
        let length = match route.head_length {
            Some(Some(n)) => format!("Content-Length: {}\r\n", n),
            Some(None) => String::new(),
            None => format!("Content-Length: {}\r\n", route.body.len()),
        };
        let response = format!(
            "HTTP/1.1 {} X\r\n{}{}{}Connection: close\r\n\r\n",
            route.status, content_type, length, location
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }
    if method.eq_ignore_ascii_case("GET") {
        if let Some(c) = gets.get(path) {
            c.fetch_add(1, Ordering::SeqCst);
        }
        if let Some(to) = &route.get_redirect {
            let response = format!(
                "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                to
            );
            let _ = stream.write_all(response.as_bytes());
            return;
        }
        let response = format!(
            "HTTP/1.1 {} X\r\n{}Content-Length: {}\r\n{}Connection: close\r\n\r\n",
            route.status,
            content_type,
            route.body.len(),
            location
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.write_all(&route.body);
        return;
    }
    let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nConnection: close\r\n\r\n");
}

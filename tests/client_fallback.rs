//! Integration tests for the two-tier fetch path, driven against local
//! TCP listeners standing in for the relay and the direct endpoint.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use taiview::api::{AttractionSource, AttractionsClient, Endpoints, FetchError};

/// A one-shot HTTP server returning a canned response and counting hits.
struct TestServer {
    base: String,
    hits: Arc<AtomicUsize>,
}

impl TestServer {
    /// Serve up to `max_requests` connections with a fixed status line
    /// and body, then stop accepting.
    fn spawn(status: &'static str, body: &'static str, max_requests: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_in_thread = Arc::clone(&hits);

        thread::spawn(move || {
            for _ in 0..max_requests {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                hits_in_thread.fetch_add(1, Ordering::SeqCst);
                read_request_head(&mut stream);
                let response = format!(
                    "HTTP/1.1 {status}\r\n\
                     content-type: application/json\r\n\
                     content-length: {}\r\n\
                     connection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { base, hits }
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Read until the end of the request head; GETs carry no body.
fn read_request_head(stream: &mut TcpStream) {
    let mut buf = [0u8; 1024];
    let mut data = Vec::new();
    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                data.extend_from_slice(&buf[..n]);
                if data.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}

/// A base URL nothing is listening on (bound once, then released).
fn unreachable_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    base
}

fn client(relay_base: String, api_base: String) -> AttractionsClient {
    AttractionsClient::with_endpoints(Endpoints {
        relay_base,
        api_base,
    })
    .unwrap()
}

const PAGE_BODY: &str = r#"{"data":[{"id":1,"name":"Taipei 101"}],"total":2}"#;

#[test]
fn relay_success_never_touches_the_direct_endpoint() {
    let relay = TestServer::spawn("200 OK", PAGE_BODY, 1);
    let direct = TestServer::spawn("200 OK", PAGE_BODY, 1);
    let client = client(relay.base.clone(), direct.base.clone());

    let response = client.fetch_page(1, "zh-tw").unwrap();

    assert_eq!(response.data.as_ref().map(Vec::len), Some(1));
    assert_eq!(response.total, Some(2));
    assert_eq!(relay.hits(), 1);
    assert_eq!(direct.hits(), 0);
}

#[test]
fn relay_non_2xx_falls_back_to_direct_exactly_once() {
    let relay = TestServer::spawn("500 Internal Server Error", "{}", 1);
    let direct = TestServer::spawn("200 OK", PAGE_BODY, 1);
    let client = client(relay.base.clone(), direct.base.clone());

    let response = client.fetch_page(1, "zh-tw").unwrap();

    assert_eq!(response.data.as_ref().map(Vec::len), Some(1));
    assert_eq!(relay.hits(), 1, "relay tried once");
    assert_eq!(direct.hits(), 1, "direct tried exactly once");
}

#[test]
fn relay_outage_falls_back_to_direct() {
    let direct = TestServer::spawn("200 OK", PAGE_BODY, 1);
    let client = client(unreachable_base(), direct.base.clone());

    let response = client.fetch_page(3, "zh-tw").unwrap();

    assert_eq!(response.data.as_ref().map(Vec::len), Some(1));
    assert_eq!(direct.hits(), 1);
}

#[test]
fn direct_non_2xx_after_fallback_carries_the_direct_flavor() {
    let relay = TestServer::spawn("502 Bad Gateway", "{}", 1);
    let direct = TestServer::spawn("401 Unauthorized", "{}", 1);
    let client = client(relay.base.clone(), direct.base.clone());

    let err = client.fetch_page(1, "zh-tw").unwrap_err();

    assert_eq!(err, FetchError::DirectStatus { status: 401 });
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "DIRECT_HTTP_401");
}

#[test]
fn both_transports_down_is_classified_unreachable() {
    let client = client(unreachable_base(), unreachable_base());

    let err = client.fetch_page(1, "zh-tw").unwrap_err();

    assert!(err.is_unreachable());
    assert!(err.to_string().starts_with("FAILED_TO_FETCH"));
}

#[test]
fn direct_body_decode_failure_surfaces_the_message_verbatim() {
    let relay = TestServer::spawn("500 Internal Server Error", "{}", 1);
    let direct = TestServer::spawn("200 OK", "not json at all", 1);
    let client = client(relay.base.clone(), direct.base.clone());

    let err = client.fetch_page(1, "zh-tw").unwrap_err();

    assert!(matches!(err, FetchError::Other(_)));
    assert!(!err.is_unreachable());
}

#[test]
fn null_data_passes_through_without_shape_validation() {
    // The fetch layer does no schema validation; classifying a missing
    // `data` field is the state machine's job.
    let relay = TestServer::spawn("200 OK", r#"{"data":null,"total":0}"#, 1);
    let direct = TestServer::spawn("200 OK", "{}", 1);
    let client = client(relay.base.clone(), direct.base.clone());

    let response = client.fetch_page(1, "zh-tw").unwrap();

    assert_eq!(response.data, None);
    assert_eq!(direct.hits(), 0);
}

//! Integration tests for the HTTP server and request processing pipeline
//!
//! Starts the demo application on a random port and talks raw HTTP/1.1 to
//! it: routing, parameter binding, query and form decoding, and the 404
//! fallback.

use serde_json::Value;
use std::net::{Ipv4Addr, SocketAddr};
use trierouter::demo::demo_engine;
use trierouter::server::{serve, serve_ephemeral, RunningServer};

mod common;
use common::http::{parse_response, send_request};
use common::test_server::setup_may_runtime;

/// Demo server fixture, stopped on drop
struct DemoServer {
    server: Option<RunningServer>,
    addr: SocketAddr,
}

impl DemoServer {
    fn new() -> Self {
        setup_may_runtime();
        let server = serve_ephemeral(demo_engine(), Ipv4Addr::LOCALHOST.into()).unwrap();
        let addr = server.addr();
        Self {
            server: Some(server),
            addr,
        }
    }

    fn get(&self, target: &str) -> (u16, String, String) {
        let req = format!("GET {target} HTTP/1.1\r\nHost: localhost\r\n\r\n");
        parse_response(&send_request(&self.addr, &req))
    }
}

impl Drop for DemoServer {
    fn drop(&mut self) {
        if let Some(server) = self.server.take() {
            server.shutdown();
        }
    }
}

#[test]
fn test_index_html() {
    let server = DemoServer::new();
    let (status, ct, body) = server.get("/");
    assert_eq!(status, 200);
    assert_eq!(ct, "text/html");
    assert_eq!(body, "<h1>Hello</h1>");
}

#[test]
fn test_query_param() {
    let server = DemoServer::new();
    let (status, ct, body) = server.get("/hello?name=geektutu");
    assert_eq!(status, 200);
    assert_eq!(ct, "text/plain");
    assert_eq!(body, "hello geektutu, you're at /hello\n");
}

#[test]
fn test_named_param() {
    let server = DemoServer::new();
    let (status, _, body) = server.get("/hello/geektutu");
    assert_eq!(status, 200);
    assert_eq!(body, "hello geektutu, you're at /hello/geektutu\n");
}

#[test]
fn test_catch_all_json() {
    let server = DemoServer::new();
    let (status, ct, body) = server.get("/assets/css/geektutu.css");
    assert_eq!(status, 200);
    assert_eq!(ct, "application/json");
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["filepath"], "css/geektutu.css");
}

#[test]
fn test_route_404() {
    let server = DemoServer::new();
    let (status, ct, body) = server.get("/nope");
    assert_eq!(status, 404);
    assert_eq!(ct, "text/plain");
    assert_eq!(body, "404 NOT FOUND: /nope\n");
}

#[test]
fn test_post_form() {
    let server = DemoServer::new();
    let form = "username=alice&password=1234";
    let req = format!(
        "POST /login HTTP/1.1\r\nHost: localhost\r\n\
         Content-Type: application/x-www-form-urlencoded\r\n\
         Content-Length: {}\r\n\r\n{}",
        form.len(),
        form
    );
    let (status, ct, body) = parse_response(&send_request(&server.addr, &req));
    assert_eq!(status, 200);
    assert_eq!(ct, "application/json");
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["username"], "alice");
    assert_eq!(v["password"], "1234");
}

#[test]
fn test_method_mismatch_is_404() {
    let server = DemoServer::new();
    let req = "POST /hello/geektutu HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\n\r\n";
    let (status, _, _) = parse_response(&send_request(&server.addr, req));
    assert_eq!(status, 404);
}

#[test]
fn test_serve_on_port_zero_reports_bound_port() {
    setup_may_runtime();
    let server = serve(demo_engine(), "127.0.0.1:0").unwrap();
    let addr = server.addr();
    assert_ne!(addr.port(), 0);

    let req = "GET / HTTP/1.1\r\nHost: localhost\r\n\r\n";
    let (status, _, body) = parse_response(&send_request(&addr, req));
    assert_eq!(status, 200);
    assert_eq!(body, "<h1>Hello</h1>");
    server.shutdown();
}

#[test]
fn test_serve_rejects_unresolvable_address() {
    setup_may_runtime();
    assert!(serve(demo_engine(), Vec::<SocketAddr>::new().as_slice()).is_err());
}

//! Demo application used by `trierouter serve` and the integration tests.

use serde_json::json;

use crate::context::{Context, H};
use crate::engine::Engine;

/// Engine with a handful of routes covering every segment kind:
///
/// | Method | Pattern             |
/// |--------|---------------------|
/// | GET    | `/`                 |
/// | GET    | `/hello`            |
/// | GET    | `/hello/:name`      |
/// | GET    | `/assets/*filepath` |
/// | POST   | `/login`            |
#[must_use]
pub fn demo_engine() -> Engine {
    let mut engine = Engine::new();

    engine.get("/", |c: &mut Context| {
        c.html(200, "<h1>Hello</h1>");
    });

    engine.get("/hello", |c: &mut Context| {
        // expect /hello?name=geektutu
        let body = format!("hello {}, you're at {}\n", c.query("name"), c.path);
        c.string(200, body);
    });

    engine.get("/hello/:name", |c: &mut Context| {
        // expect /hello/geektutu
        let body = format!("hello {}, you're at {}\n", c.param("name"), c.path);
        c.string(200, body);
    });

    engine.get("/assets/*filepath", |c: &mut Context| {
        let mut body = H::new();
        body.insert("filepath".to_string(), json!(c.param("filepath")));
        c.json(200, &body);
    });

    engine.post("/login", |c: &mut Context| {
        let body = json!({
            "username": c.post_form("username"),
            "password": c.post_form("password"),
        });
        c.json(200, &body);
    });

    engine
}

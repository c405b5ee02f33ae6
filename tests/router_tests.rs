//! Route table behaviour through the public API.

use http::Method;
use trierouter::router::{Router, RouteMatch};

fn scenario_router() -> Router<&'static str> {
    let mut router = Router::new();
    router.register(Method::GET, "/", "index");
    router.register(Method::GET, "/hello/:name", "hello");
    router.register(Method::GET, "/hello/b/c", "hello_b_c");
    router.register(Method::GET, "/assets/*filepath", "assets");
    router
}

fn assert_route_match(router: &Router<&'static str>, method: Method, path: &str, expected: &str) {
    match router.resolve(&method, path) {
        Some(RouteMatch { handler, .. }) => {
            assert_eq!(
                *handler, expected,
                "Handler mismatch for {} {}: expected '{}', got '{}'",
                method, path, expected, handler
            );
        }
        None => {
            assert_eq!(expected, "<none>", "Expected route to match for {} {}", method, path);
        }
    }
}

#[test]
fn test_scenario() {
    let router = scenario_router();

    let m = router.resolve(&Method::GET, "/").unwrap();
    assert_eq!(m.pattern, "/");
    assert!(m.params.is_empty());

    let m = router.resolve(&Method::GET, "/hello/geektutu").unwrap();
    assert_eq!(m.pattern, "/hello/:name");
    assert_eq!(m.params.len(), 1);
    assert_eq!(m.param("name"), Some("geektutu"));

    let m = router.resolve(&Method::GET, "/assets/css/test.css").unwrap();
    assert_eq!(m.pattern, "/assets/*filepath");
    assert_eq!(m.param("filepath"), Some("css/test.css"));

    assert!(router.resolve(&Method::GET, "/nope").is_none());
}

#[test]
fn test_named_param_binds_any_token() {
    let mut router = Router::new();
    router.register(Method::GET, "/a/:x/c", "axc");
    for token in ["1", "abc", "with-dash", "%20"] {
        let path = format!("/a/{token}/c");
        let m = router.resolve(&Method::GET, &path).unwrap();
        assert_eq!(m.param("x"), Some(token));
    }
}

#[test]
fn test_catch_all_absorption() {
    let mut router = Router::new();
    router.register(Method::GET, "/assets/*file", "assets");
    let m = router.resolve(&Method::GET, "/assets/css/a.css").unwrap();
    assert_eq!(m.param("file"), Some("css/a.css"));
}

#[test]
fn test_no_match_for_unregistered_method() {
    let router = scenario_router();
    assert_route_match(&router, Method::POST, "/", "<none>");
    assert_route_match(&router, Method::DELETE, "/hello/x", "<none>");

    let empty: Router<()> = Router::new();
    assert!(empty.resolve(&Method::GET, "/").is_none());
}

#[test]
fn test_no_partial_matches() {
    let router = scenario_router();
    assert_route_match(&router, Method::GET, "/hello", "<none>");
    assert_route_match(&router, Method::GET, "/hello/b", "hello");
    assert_route_match(&router, Method::GET, "/hello/b/c/d", "<none>");
    assert_route_match(&router, Method::GET, "/assets", "<none>");
}

#[test]
fn test_reregistration_keeps_second_handler() {
    let mut router = Router::new();
    router.register(Method::GET, "/p", "first");
    router.register(Method::GET, "/p", "second");
    assert_route_match(&router, Method::GET, "/p", "second");
    assert_eq!(router.len(), 1);
}

#[test]
fn test_tie_break_follows_registration_order() {
    // wildcard first: the static registration lands on the shared wild node
    let mut router = Router::new();
    router.register(Method::GET, "/user/:id", "by_id");
    router.register(Method::GET, "/user/profile", "profile");
    let m = router.resolve(&Method::GET, "/user/profile").unwrap();
    assert_eq!(m.pattern, "/user/profile");
    assert_eq!(*m.handler, "profile");
    let m = router.resolve(&Method::GET, "/user/42").unwrap();
    assert_eq!(m.pattern, "/user/profile");
    assert!(m.params.is_empty());

    // static first: static child is tried before the wildcard sibling
    let mut router = Router::new();
    router.register(Method::GET, "/user/profile", "profile");
    router.register(Method::GET, "/user/:id", "by_id");
    assert_route_match(&router, Method::GET, "/user/profile", "profile");
    assert_route_match(&router, Method::GET, "/user/42", "by_id");
}

#[test]
fn test_same_pattern_different_methods() {
    let mut router = Router::new();
    router.register(Method::GET, "/items/:id", "get_item");
    router.register(Method::PUT, "/items/:id", "put_item");
    router.register(Method::DELETE, "/items/:id", "delete_item");

    assert_route_match(&router, Method::GET, "/items/1", "get_item");
    assert_route_match(&router, Method::PUT, "/items/1", "put_item");
    assert_route_match(&router, Method::DELETE, "/items/1", "delete_item");
    assert_route_match(&router, Method::PATCH, "/items/1", "<none>");
    assert_eq!(router.methods().count(), 3);
}

#[test]
fn test_star_segment_in_request_path_acts_like_catch_all() {
    // request paths share the pattern parser, so `*x` ends the parsed path
    let mut router = Router::new();
    router.register(Method::GET, "/a/:b", "a_b");
    let m = router.resolve(&Method::GET, "/a/*x/y").unwrap();
    assert_eq!(m.param("b"), Some("*x"));
}

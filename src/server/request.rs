use may_minihttp::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Request data extracted from a `may_minihttp::Request`
#[derive(Debug, PartialEq)]
pub struct ParsedRequest {
    /// HTTP method as sent by the client (GET, POST, etc.)
    pub method: String,
    /// Path with the query string removed
    pub path: String,
    /// Decoded query string parameters
    pub query_params: HashMap<String, String>,
    /// Decoded urlencoded form body (empty for other content types)
    pub form: HashMap<String, String>,
}

/// Split a request target into its path and optional query string.
#[must_use]
pub fn split_path(target: &str) -> (&str, Option<&str>) {
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

/// Decode `a=1&b=two` pairs. Later duplicates win.
#[must_use]
pub fn parse_query(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Decode an `application/x-www-form-urlencoded` body.
#[must_use]
pub fn parse_form(content_type: Option<&str>, body: &[u8]) -> HashMap<String, String> {
    let is_form = content_type
        .map(|ct| ct.trim().to_ascii_lowercase().starts_with(FORM_URLENCODED))
        .unwrap_or(false);
    if !is_form || body.is_empty() {
        return HashMap::new();
    }
    url::form_urlencoded::parse(body)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Pull method, path, query and form values out of the raw request.
#[must_use]
pub fn parse_request(req: Request) -> ParsedRequest {
    let method = req.method().to_string();
    let (path, query) = split_path(req.path());
    let path = path.to_string();
    let query_params = query.map(parse_query).unwrap_or_default();

    let content_type = req
        .headers()
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case("content-type"))
        .map(|h| String::from_utf8_lossy(h.value).into_owned());

    let mut body = Vec::new();
    if let Err(err) = req.body().read_to_end(&mut body) {
        debug!(error = %err, "Failed to read request body");
        body.clear();
    }
    let form = parse_form(content_type.as_deref(), &body);

    debug!(
        method = %method,
        path = %path,
        query_count = query_params.len(),
        form_count = form.len(),
        "Parsed request"
    );

    ParsedRequest {
        method,
        path,
        query_params,
        form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/hello?name=a"), ("/hello", Some("name=a")));
        assert_eq!(split_path("/hello"), ("/hello", None));
    }

    #[test]
    fn test_parse_query_decodes() {
        let q = parse_query("name=geek%20tutu&x=1&x=2");
        assert_eq!(q.get("name").map(String::as_str), Some("geek tutu"));
        assert_eq!(q.get("x").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_parse_form_requires_urlencoded() {
        let body = b"username=alice&password=1234";
        let form = parse_form(Some("application/x-www-form-urlencoded; charset=utf-8"), body);
        assert_eq!(form.get("username").map(String::as_str), Some("alice"));
        assert!(parse_form(Some("application/json"), body).is_empty());
        assert!(parse_form(None, body).is_empty());
    }
}

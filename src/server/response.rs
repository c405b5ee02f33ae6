use crate::context::{Context, APPLICATION_JSON, CONTENT_TYPE, TEXT_HTML, TEXT_PLAIN};
use may_minihttp::Response;
use std::collections::HashSet;
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::warn;

/// Header slots in a `may_minihttp` response
pub const MAX_RESPONSE_HEADERS: usize = 16;

/// Header lines leaked so far; each distinct line is leaked at most once
static HEADER_LINES: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();

#[must_use]
pub fn status_reason(status: u16) -> &'static str {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown")
}

/// may_minihttp only accepts `'static` header lines. Common Content-Type
/// lines are constants; any other line is leaked on first use and reused
/// afterwards, so memory grows with the number of distinct lines only.
fn header_line(key: &str, value: &str) -> &'static str {
    if key.eq_ignore_ascii_case(CONTENT_TYPE) {
        match value {
            TEXT_PLAIN => return "Content-Type: text/plain",
            TEXT_HTML => return "Content-Type: text/html",
            APPLICATION_JSON => return "Content-Type: application/json",
            _ => {}
        }
    }
    intern(&format!("{key}: {value}"))
}

fn intern(line: &str) -> &'static str {
    let mut lines = HEADER_LINES
        .get_or_init(|| Mutex::new(HashSet::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = lines.get(line) {
        return *existing;
    }
    let leaked: &'static str = Box::leak(line.to_owned().into_boxed_str());
    lines.insert(leaked);
    leaked
}

/// Write the response buffered in `ctx` onto the wire response.
///
/// Headers beyond [`MAX_RESPONSE_HEADERS`] are dropped with a warning.
pub fn write_context_response(res: &mut Response, ctx: &mut Context) {
    res.status_code(ctx.status_code as usize, status_reason(ctx.status_code));
    let headers = ctx.headers();
    if headers.len() > MAX_RESPONSE_HEADERS {
        warn!(
            path = %ctx.path,
            header_count = headers.len(),
            "Too many response headers, extra headers dropped"
        );
    }
    for (key, value) in headers.iter().take(MAX_RESPONSE_HEADERS) {
        res.header(header_line(key, value));
    }
    res.body_vec(ctx.take_body());
}

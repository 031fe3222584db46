//! Server-side HTML rendering.
//!
//! Pages are plain `format!` strings wrapped in one shared layout. Every
//! value that comes from an article or a request goes through `escape` or
//! `escape_attr` before it is interpolated.

pub mod news;

use actix_web::HttpResponse;

/// Wraps a rendered page in a `200 OK` HTML response.
pub fn html(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    escape(s).replace('"', "&quot;").replace('\'', "&#39;")
}

/// `url` when it is an absolute `http`/`https` link, safe to place in an
/// `href` or `src`. Anything else (`javascript:`, `data:`, relative paths)
/// is only ever shown as text.
pub fn web_url(url: &str) -> Option<&str> {
    let scheme = url.split_once("://").map(|(scheme, _)| scheme)?;
    (scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")).then_some(url)
}

/// The page shell shared by every view. `content` must already be escaped.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem; }}
nav a {{ margin-right: 1rem; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: .4rem; text-align: center; }}
.card {{ border: 1px solid #999; border-radius: 4px; margin-bottom: 1rem; padding: 1rem; }}
.error {{ color: #b00020; }}
.notice {{ color: #1b5e20; }}
</style>
</head>
<body>
<nav><a href="/news/table">Table</a><a href="/news/watch">News</a><a href="/news/create">New article</a><a href="/news/json">JSON</a></nav>
<h3>News platform</h3>
{content}
</body>
</html>"#,
        title = escape(title),
        content = content,
    )
}

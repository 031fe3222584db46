use super::{escape, escape_attr, layout, web_url};
use common::model::article::Article;
use common::requests::{FieldError, NewArticleRequest};
use std::fmt::Write;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fields of the create form, in display order, with their input kind.
const FORM_FIELDS: [(&str, &str, bool); 7] = [
    ("title", "Title", false),
    ("author", "Author", false),
    ("source", "Source", false),
    ("url", "URL", false),
    ("url_image", "Image URL", false),
    ("description", "Description", true),
    ("content", "Content", true),
];

/// Every article in one table, each row with a delete button.
pub fn table_page(articles: &[Article]) -> String {
    if articles.is_empty() {
        return layout("News", &empty_card());
    }

    let mut rows = String::new();
    for article in articles {
        let _ = write!(
            rows,
            r#"<tr>
<td>{title}</td><td>{author}</td><td>{source}</td><td>{url}</td><td>{url_image}</td>
<td>{description}</td><td>{content}</td><td>{date}</td>
<td><form method="post" action="/news/{id}/delete" onsubmit="return confirm('Are you sure you want to delete this article?')">
<input type="submit" value="Delete" /></form></td>
</tr>
"#,
            id = article.id,
            title = escape(&article.title),
            author = escape(&article.author),
            source = escape(&article.source),
            url = escape(&article.url),
            url_image = escape(&article.url_image),
            description = escape(&article.description),
            content = escape(&article.content),
            date = article.published_at.format(DATE_FORMAT),
        );
    }

    let content = format!(
        r#"<div class="card"><table>
<tr><th>title</th><th>author</th><th>source</th><th>url</th><th>url_image</th><th>description</th><th>content</th><th>date</th><th>Action</th></tr>
{rows}</table></div>"#
    );
    layout("News", &content)
}

/// Every article as a reading card linking to its own page.
pub fn watch_page(articles: &[Article]) -> String {
    if articles.is_empty() {
        return layout("News", &empty_card());
    }

    let mut cards = String::new();
    for article in articles {
        let _ = write!(
            cards,
            r#"<div class="card">
{image}
<h4><a href="/news/{id}">{title}</a></h4>
<p>{description}</p>
<small>{author} · {source} · {date}</small>
</div>
"#,
            id = article.id,
            image = image_tag(&article.url_image, 200),
            title = escape(&article.title),
            description = escape(&article.description),
            author = escape(&article.author),
            source = escape(&article.source),
            date = article.published_at.format(DATE_FORMAT),
        );
    }
    layout("News", &cards)
}

/// A single article.
pub fn article_page(article: &Article) -> String {
    let content = format!(
        r#"<div class="card">
<h2>{title}</h2>
<p><small>{author} · {source} · {date}</small></p>
{image}
<p><strong>{description}</strong></p>
<div>{content}</div>
<p>{link}</p>
</div>"#,
        title = escape(&article.title),
        author = escape(&article.author),
        source = escape(&article.source),
        date = article.published_at.format(DATE_FORMAT),
        image = image_tag(&article.url_image, 400),
        description = escape(&article.description),
        content = escape(&article.content),
        link = source_link(&article.url),
    );
    layout(&article.title, &content)
}

/// JSON endpoints a reader can open straight from the browser.
const JSON_LINKS: [(&str, &str); 3] = [
    ("/news", "Every article"),
    ("/news/resource?page=1&pageSize=20", "First page, most recent first"),
    ("/news/search/news", "Titles containing \"news\""),
];

/// A page of links to the JSON endpoints.
pub fn json_page() -> String {
    let mut items = String::new();
    for (href, label) in JSON_LINKS {
        let _ = writeln!(
            items,
            r#"<li><a href="{}">{}</a> <code>{}</code></li>"#,
            escape_attr(href),
            escape(label),
            escape(href)
        );
    }
    layout("News as JSON", &format!(r#"<div class="card"><ul>{items}</ul></div>"#))
}

/// The create form, refilled from `request` and annotated with `errors`.
pub fn create_page(
    request: &NewArticleRequest,
    errors: &[FieldError],
    notice: Option<&str>,
) -> String {
    let mut content = String::new();
    if let Some(notice) = notice {
        let _ = write!(content, r#"<p class="notice">{}</p>"#, escape(notice));
    }

    content.push_str(r#"<form class="card" method="post" action="/news">"#);
    for (name, label, multiline) in FORM_FIELDS {
        let value = request.field(name).unwrap_or_default();
        let _ = write!(content, r#"<p><label for="{name}">{label}</label><br />"#);
        if multiline {
            let _ = write!(
                content,
                r#"<textarea id="{name}" name="{name}" rows="4" cols="60">{}</textarea>"#,
                escape(value)
            );
        } else {
            let _ = write!(
                content,
                r#"<input id="{name}" name="{name}" type="text" size="60" value="{}" />"#,
                escape_attr(value)
            );
        }
        for error in errors.iter().filter(|e| e.field == name) {
            let _ = write!(
                content,
                r#"<br /><span class="error">{}</span>"#,
                escape(&error.message)
            );
        }
        content.push_str("</p>");
    }
    content.push_str(r#"<input type="submit" value="Save" /></form>"#);

    layout("New article", &content)
}

fn image_tag(url: &str, width: u32) -> String {
    match web_url(url) {
        Some(url) => format!(r#"<img src="{}" alt="" width="{width}" />"#, escape_attr(url)),
        None => String::new(),
    }
}

fn source_link(url: &str) -> String {
    match web_url(url) {
        Some(url) => format!(r#"<a href="{}">Read at the source</a>"#, escape_attr(url)),
        None => format!("Source: {}", escape(url)),
    }
}

fn empty_card() -> String {
    r#"<div class="card"><h6>There is no recorded news</h6></div>"#.to_string()
}

//! SQLite persistence for news articles.
//!
//! A single connection is opened at startup and shared by every worker
//! through `web::Data<ArticleStore>`; an async mutex serializes access to it.

mod articles;

pub use articles::ArticleStore;

/// Creates the `news` table and its ordering index when they do not exist.
pub(crate) const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS news (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        title        TEXT NOT NULL,
        author       TEXT NOT NULL,
        source       TEXT NOT NULL,
        url          TEXT NOT NULL,
        url_image    TEXT NOT NULL,
        description  TEXT NOT NULL,
        content      TEXT NOT NULL,
        published_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS news_published_at_idx ON news (published_at DESC, id DESC);
";

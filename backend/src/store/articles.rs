use super::SCHEMA;
use chrono::{DateTime, Utc};
use common::model::article::{Article, NewArticle};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;

const COLUMNS: &str =
    "id, title, author, source, url, url_image, description, content, published_at";

/// Columns a listing keyword is matched against.
const KEYWORD_COLUMNS: [&str; 5] = ["title", "author", "source", "content", "description"];

/// The article table behind the news endpoints.
pub struct ArticleStore {
    conn: Mutex<Connection>,
}

impl ArticleStore {
    /// Opens (or creates) the SQLite file at `path` and ensures the schema.
    pub fn open(path: &str) -> rusqlite::Result<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Persists a validated article and returns it with its new id.
    pub async fn insert(
        &self,
        article: NewArticle,
        published_at: DateTime<Utc>,
    ) -> rusqlite::Result<Article> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO news (title, author, source, url, url_image, description, content, published_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                article.title,
                article.author,
                article.source,
                article.url,
                article.url_image,
                article.description,
                article.content,
                published_at,
            ],
        )?;
        let id = conn.last_insert_rowid();
        Ok(article.into_article(id, published_at))
    }

    /// Every article in insertion order.
    pub async fn all(&self) -> rusqlite::Result<Vec<Article>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM news ORDER BY id"))?;
        let rows = stmt.query_map([], article_from_row)?;
        rows.collect()
    }

    pub async fn find(&self, id: i64) -> rusqlite::Result<Option<Article>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM news WHERE id = ?1"),
            params![id],
            article_from_row,
        )
        .optional()
    }

    /// Removes the article, returning whether a row existed.
    pub async fn delete(&self, id: i64) -> rusqlite::Result<bool> {
        let conn = self.conn.lock().await;
        let removed = conn.execute("DELETE FROM news WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    /// One window of the articles, most recently published first, together
    /// with the number of articles matching `keyword` (all of them without
    /// one). Both come from the same lock so `total` always describes the
    /// collection the window was cut from.
    pub async fn latest_page(
        &self,
        keyword: Option<&str>,
        limit: u32,
        offset: u64,
    ) -> rusqlite::Result<(u64, Vec<Article>)> {
        let conn = self.conn.lock().await;
        let total = count_matching(&conn, keyword)?;
        let articles = window(&conn, keyword, limit, offset)?;
        Ok((total, articles))
    }

    #[cfg(test)]
    pub async fn count(&self, keyword: Option<&str>) -> rusqlite::Result<u64> {
        count_matching(&*self.conn.lock().await, keyword)
    }

    /// Articles whose title contains `keyword`, unpaginated.
    pub async fn search_title(&self, keyword: &str) -> rusqlite::Result<Vec<Article>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM news WHERE title LIKE ?1 ESCAPE '\\' ORDER BY id"
        ))?;
        let rows = stmt.query_map(params![like_pattern(keyword)], article_from_row)?;
        rows.collect()
    }
}

fn count_matching(conn: &Connection, keyword: Option<&str>) -> rusqlite::Result<u64> {
    let total: i64 = match keyword {
        Some(keyword) => conn.query_row(
            &format!("SELECT COUNT(*) FROM news WHERE {}", keyword_filter()),
            params![like_pattern(keyword)],
            |row| row.get(0),
        )?,
        None => conn.query_row("SELECT COUNT(*) FROM news", [], |row| row.get(0))?,
    };
    Ok(total.max(0) as u64)
}

fn window(
    conn: &Connection,
    keyword: Option<&str>,
    limit: u32,
    offset: u64,
) -> rusqlite::Result<Vec<Article>> {
    let offset = i64::try_from(offset).unwrap_or(i64::MAX);
    match keyword {
        Some(keyword) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM news WHERE {}
                 ORDER BY published_at DESC, id DESC LIMIT ?2 OFFSET ?3",
                keyword_filter()
            ))?;
            let rows = stmt.query_map(
                params![like_pattern(keyword), limit, offset],
                article_from_row,
            )?;
            rows.collect()
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM news
                 ORDER BY published_at DESC, id DESC LIMIT ?1 OFFSET ?2"
            ))?;
            let rows = stmt.query_map(params![limit, offset], article_from_row)?;
            rows.collect()
        }
    }
}

fn article_from_row(row: &Row<'_>) -> rusqlite::Result<Article> {
    Ok(Article {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        source: row.get(3)?,
        url: row.get(4)?,
        url_image: row.get(5)?,
        description: row.get(6)?,
        content: row.get(7)?,
        published_at: row.get(8)?,
    })
}

/// `title LIKE ?1 ESCAPE '\' OR author LIKE ?1 ESCAPE '\' OR ...`
fn keyword_filter() -> String {
    let clauses: Vec<String> = KEYWORD_COLUMNS
        .iter()
        .map(|column| format!("{column} LIKE ?1 ESCAPE '\\'"))
        .collect();
    format!("({})", clauses.join(" OR "))
}

/// Substring pattern for `LIKE`, with the wildcards of `keyword` escaped.
fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn new_article(title: &str) -> NewArticle {
        NewArticle {
            title: title.to_string(),
            author: "A".to_string(),
            source: "S".to_string(),
            url: "http://x".to_string(),
            url_image: "http://y".to_string(),
            description: "D".to_string(),
            content: "C".to_string(),
        }
    }

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap() + Duration::days(n)
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Eco"), "%Eco%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[actix_web::test]
    async fn insert_assigns_ids_and_round_trips() {
        let store = ArticleStore::open_in_memory().unwrap();
        let first = store.insert(new_article("First"), day(0)).await.unwrap();
        let second = store.insert(new_article("Second"), day(1)).await.unwrap();
        assert_ne!(first.id, second.id);

        let found = store.find(second.id).await.unwrap().unwrap();
        assert_eq!(found, second);
        assert_eq!(found.published_at, day(1));
        assert_eq!(store.find(999).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn all_keeps_insertion_order() {
        let store = ArticleStore::open_in_memory().unwrap();
        store.insert(new_article("Old"), day(5)).await.unwrap();
        store.insert(new_article("New"), day(1)).await.unwrap();
        let titles: Vec<String> = store.all().await.unwrap().into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Old", "New"]);
    }

    #[actix_web::test]
    async fn latest_orders_by_publication_and_windows() {
        let store = ArticleStore::open_in_memory().unwrap();
        for (n, title) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            store.insert(new_article(title), day(n as i64)).await.unwrap();
        }
        let titles = |articles: Vec<Article>| -> Vec<String> {
            articles.into_iter().map(|a| a.title).collect()
        };
        let (total, first) = store.latest_page(None, 2, 0).await.unwrap();
        assert_eq!(total, 5);
        assert_eq!(titles(first), vec!["e", "d"]);
        let (_, last) = store.latest_page(None, 2, 4).await.unwrap();
        assert_eq!(titles(last), vec!["a"]);
        let (total, past_end) = store.latest_page(None, 2, 10).await.unwrap();
        assert_eq!(total, 5);
        assert!(past_end.is_empty());
    }

    #[actix_web::test]
    async fn same_timestamp_falls_back_to_newest_id() {
        let store = ArticleStore::open_in_memory().unwrap();
        let older = store.insert(new_article("older"), day(0)).await.unwrap();
        let newer = store.insert(new_article("newer"), day(0)).await.unwrap();
        let (_, articles) = store.latest_page(None, 10, 0).await.unwrap();
        let ids: Vec<i64> = articles
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }

    #[actix_web::test]
    async fn keyword_matches_any_text_column() {
        let store = ArticleStore::open_in_memory().unwrap();
        store.insert(new_article("Economy News"), day(0)).await.unwrap();
        let mut by_author = new_article("Sports Update");
        by_author.author = "Economist desk".to_string();
        store.insert(by_author, day(1)).await.unwrap();
        store.insert(new_article("Weather"), day(2)).await.unwrap();

        assert_eq!(store.count(Some("Econ")).await.unwrap(), 2);
        assert_eq!(store.count(None).await.unwrap(), 3);
        let (total, page) = store.latest_page(Some("Econ"), 1, 1).await.unwrap();
        assert_eq!(total, 2);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "Economy News");
    }

    #[actix_web::test]
    async fn search_title_only_looks_at_titles() {
        let store = ArticleStore::open_in_memory().unwrap();
        store.insert(new_article("Economy News"), day(0)).await.unwrap();
        let mut other = new_article("Sports Update");
        other.content = "Eco".to_string();
        store.insert(other, day(1)).await.unwrap();

        let found = store.search_title("Eco").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Economy News");
        assert!(store.search_title("Politics").await.unwrap().is_empty());
        assert!(store.search_title("%").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn delete_reports_whether_a_row_existed() {
        let store = ArticleStore::open_in_memory().unwrap();
        let article = store.insert(new_article("Gone"), day(0)).await.unwrap();
        assert!(store.delete(article.id).await.unwrap());
        assert!(!store.delete(article.id).await.unwrap());
        assert_eq!(store.count(None).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn file_store_keeps_articles_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.sqlite");
        let path = path.to_str().unwrap();

        let store = ArticleStore::open(path).unwrap();
        let stored = store.insert(new_article("Persisted"), day(3)).await.unwrap();
        drop(store);

        let reopened = ArticleStore::open(path).unwrap();
        assert_eq!(reopened.find(stored.id).await.unwrap(), Some(stored));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored news article.
///
/// Every field except `id` and `published_at` comes from the create request
/// and has already passed `NewArticleRequest::validate`. The store assigns
/// `id` and the creation time is written once to `published_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Identifier assigned by the store, never reused.
    pub id: i64,
    pub title: String,
    pub author: String,
    pub source: String,
    pub url: String,
    pub url_image: String,
    pub description: String,
    pub content: String,
    /// When the article was stored (UTC).
    pub published_at: DateTime<Utc>,
}

/// The validated fields of an article that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub author: String,
    pub source: String,
    pub url: String,
    pub url_image: String,
    pub description: String,
    pub content: String,
}

impl NewArticle {
    /// Attaches the identity the store gave this article.
    pub fn into_article(self, id: i64, published_at: DateTime<Utc>) -> Article {
        Article {
            id,
            title: self.title,
            author: self.author,
            source: self.source,
            url: self.url,
            url_image: self.url_image,
            description: self.description,
            content: self.content,
            published_at,
        }
    }
}

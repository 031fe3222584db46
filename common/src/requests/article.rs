use crate::model::article::NewArticle;
use serde::{Deserialize, Serialize};

const SHORT_TEXT_MAX: usize = 255;
const URL_MIN: usize = 3;

/// Request payload for creating a news article, as sent by the create form
/// or a JSON client. Every field is optional here so that missing fields are
/// reported by `validate` instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewArticleRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
    pub url_image: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
}

/// A single unmet constraint on one request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

enum Length {
    Any,
    Max(usize),
    Min(usize),
}

impl NewArticleRequest {
    /// Checks every field and returns the trimmed values, or all the
    /// failures in field order.
    pub fn validate(&self) -> Result<NewArticle, Vec<FieldError>> {
        let mut errors = Vec::new();

        let article = NewArticle {
            title: check(&mut errors, "title", &self.title, Length::Max(SHORT_TEXT_MAX)),
            author: check(&mut errors, "author", &self.author, Length::Max(SHORT_TEXT_MAX)),
            source: check(&mut errors, "source", &self.source, Length::Max(SHORT_TEXT_MAX)),
            url: check(&mut errors, "url", &self.url, Length::Min(URL_MIN)),
            url_image: check(&mut errors, "url_image", &self.url_image, Length::Min(URL_MIN)),
            description: check(&mut errors, "description", &self.description, Length::Any),
            content: check(&mut errors, "content", &self.content, Length::Any),
        };

        if errors.is_empty() {
            Ok(article)
        } else {
            Err(errors)
        }
    }

    /// Current value of a field by name, used to refill the create form.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "title" => &self.title,
            "author" => &self.author,
            "source" => &self.source,
            "url" => &self.url,
            "url_image" => &self.url_image,
            "description" => &self.description,
            "content" => &self.content,
            _ => return None,
        };
        value.as_deref()
    }
}

fn check(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: &Option<String>,
    length: Length,
) -> String {
    let label = field.replace('_', " ");
    let value = value.as_deref().unwrap_or_default().trim();

    if value.is_empty() {
        errors.push(FieldError {
            field: field.to_string(),
            message: format!("The field {label} must be filled"),
        });
        return String::new();
    }

    let chars = value.chars().count();
    match length {
        Length::Max(max) if chars > max => errors.push(FieldError {
            field: field.to_string(),
            message: format!("The field {label} may not be greater than {max} characters"),
        }),
        Length::Min(min) if chars < min => errors.push(FieldError {
            field: field.to_string(),
            message: format!("The field {label} must be at least {min} characters"),
        }),
        _ => {}
    }

    value.to_string()
}

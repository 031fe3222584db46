//! Request payloads accepted by the news endpoints, together with the
//! validation that turns them into typed values.

mod article;
mod pagination;

pub use article::{FieldError, NewArticleRequest};
pub use pagination::{
    DEFAULT_PAGE_SIZE, ListQuery, MAX_PAGE_SIZE, MIN_PAGE_SIZE, PageParams, ParamError,
};

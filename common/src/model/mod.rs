pub mod article;
pub mod page;

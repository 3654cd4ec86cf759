pub mod defs;

pub use defs::{Article, ArticleBatch, Source};

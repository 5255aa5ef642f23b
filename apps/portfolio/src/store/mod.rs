//! Content store — read-only access to everything the site renders.
//!
//! `AppState` carries an `Arc<dyn ContentStore>`; production uses
//! `PgContentStore`, tests swap in the in-memory `MemoryStore`.

mod postgres;
mod seed;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::content::{
    Badge, BlogPost, Experience, ResearchItem, ResearchPage, Settings, SkillGroup,
};

pub use postgres::PgContentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{what} not found")]
    NotFound { what: String },

    #[error("database error: {0}")]
    Backend(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One method per read the pages need. Lists come back complete and in
/// display order.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn get_settings(&self) -> StoreResult<Settings>;

    async fn list_about_paragraphs(&self) -> StoreResult<Vec<String>>;

    async fn list_skill_groups(&self) -> StoreResult<Vec<SkillGroup>>;

    async fn list_trust_badges(&self) -> StoreResult<Vec<Badge>>;

    /// Newest first.
    async fn list_blog_posts(&self) -> StoreResult<Vec<BlogPost>>;

    async fn list_research_items(&self) -> StoreResult<Vec<ResearchItem>>;

    /// Fails with `StoreError::NotFound` when no page has this slug.
    async fn get_research_page(&self, slug: &str) -> StoreResult<ResearchPage>;

    async fn list_experiences(&self) -> StoreResult<Vec<Experience>>;
}

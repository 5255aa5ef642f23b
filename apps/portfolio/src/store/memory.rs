//! In-memory `ContentStore` for handler tests.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{ContentStore, StoreError, StoreResult};
use crate::models::content::{
    Badge, BlogPost, Experience, ResearchItem, ResearchPage, Settings, SkillGroup,
};

#[derive(Default)]
pub struct MemoryStore {
    pub settings: Settings,
    pub about: Vec<String>,
    pub skills: Vec<SkillGroup>,
    pub badges: Vec<Badge>,
    pub blog_posts: Vec<BlogPost>,
    pub research_items: Vec<ResearchItem>,
    pub research_pages: Vec<ResearchPage>,
    pub experiences: Vec<Experience>,
    failing: AtomicBool,
}

impl MemoryStore {
    /// A store with one or two recognizable rows per section.
    pub fn sample() -> Self {
        Self {
            settings: Settings {
                name: "Sam Carter".to_string(),
                tagline: "Builds databases".to_string(),
                email: "sam@example.com".to_string(),
                location: "Lisbon".to_string(),
                github_url: "https://github.com/sam".to_string(),
                linkedin_url: "https://linkedin.com/in/sam".to_string(),
            },
            about: vec!["About paragraph <em>one</em>".to_string()],
            skills: vec![SkillGroup {
                name: "Languages".to_string(),
                skills: vec!["Rust".to_string(), "Go".to_string()],
            }],
            badges: vec![Badge {
                label: "Badge Alpha".to_string(),
                detail: "ten years".to_string(),
            }],
            blog_posts: vec![BlogPost {
                slug: "first-post".to_string(),
                title: "Blog Post Title".to_string(),
                published_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
                summary: "Post summary".to_string(),
                body: "<p>Post body</p>".to_string(),
            }],
            research_items: vec![ResearchItem {
                slug: "learned-indexes".to_string(),
                title: "Research Item Title".to_string(),
                venue: "VLDB".to_string(),
                year: 2024,
                summary: "Research summary".to_string(),
            }],
            research_pages: vec![ResearchPage {
                slug: "learned-indexes".to_string(),
                title: "Research Page Title".to_string(),
                subtitle: "Research subtitle".to_string(),
                body: "<p>Research <strong>body</strong></p>".to_string(),
            }],
            experiences: vec![Experience {
                role: "Experience Role".to_string(),
                organization: "Experience Org".to_string(),
                location: "Remote".to_string(),
                started: "2020".to_string(),
                ended: "Present".to_string(),
                description: "<p>Did things</p>".to_string(),
            }],
            failing: AtomicBool::new(false),
        }
    }

    /// While set, every read fails with a backend error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Backend(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get_settings(&self) -> StoreResult<Settings> {
        self.check()?;
        Ok(self.settings.clone())
    }

    async fn list_about_paragraphs(&self) -> StoreResult<Vec<String>> {
        self.check()?;
        Ok(self.about.clone())
    }

    async fn list_skill_groups(&self) -> StoreResult<Vec<SkillGroup>> {
        self.check()?;
        Ok(self.skills.clone())
    }

    async fn list_trust_badges(&self) -> StoreResult<Vec<Badge>> {
        self.check()?;
        Ok(self.badges.clone())
    }

    async fn list_blog_posts(&self) -> StoreResult<Vec<BlogPost>> {
        self.check()?;
        Ok(self.blog_posts.clone())
    }

    async fn list_research_items(&self) -> StoreResult<Vec<ResearchItem>> {
        self.check()?;
        Ok(self.research_items.clone())
    }

    async fn get_research_page(&self, slug: &str) -> StoreResult<ResearchPage> {
        self.check()?;
        self.research_pages
            .iter()
            .find(|page| page.slug == slug)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                what: format!("research page '{slug}'"),
            })
    }

    async fn list_experiences(&self) -> StoreResult<Vec<Experience>> {
        self.check()?;
        Ok(self.experiences.clone())
    }
}

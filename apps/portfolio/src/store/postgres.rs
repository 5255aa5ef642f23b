use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::info;

use super::seed;
use super::{ContentStore, StoreError, StoreResult};
use crate::db::create_pool;
use crate::models::content::{
    Badge, BlogPost, Experience, ResearchItem, ResearchPage, Settings, SkillGroup,
};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS site_settings (
        id           SMALLINT PRIMARY KEY DEFAULT 1 CHECK (id = 1),
        name         TEXT NOT NULL,
        tagline      TEXT NOT NULL DEFAULT '',
        email        TEXT NOT NULL DEFAULT '',
        location     TEXT NOT NULL DEFAULT '',
        github_url   TEXT NOT NULL DEFAULT '',
        linkedin_url TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS about_paragraphs (
        id       SERIAL PRIMARY KEY,
        position INTEGER NOT NULL,
        body     TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skill_groups (
        id       SERIAL PRIMARY KEY,
        position INTEGER NOT NULL,
        name     TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skills (
        id       SERIAL PRIMARY KEY,
        group_id INTEGER NOT NULL REFERENCES skill_groups (id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        name     TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS trust_badges (
        id       SERIAL PRIMARY KEY,
        position INTEGER NOT NULL,
        label    TEXT NOT NULL,
        detail   TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS blog_posts (
        id           SERIAL PRIMARY KEY,
        slug         TEXT NOT NULL UNIQUE,
        title        TEXT NOT NULL,
        published_on DATE NOT NULL,
        summary      TEXT NOT NULL DEFAULT '',
        body         TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS research_items (
        id       SERIAL PRIMARY KEY,
        position INTEGER NOT NULL,
        slug     TEXT NOT NULL UNIQUE,
        title    TEXT NOT NULL,
        venue    TEXT NOT NULL DEFAULT '',
        year     INTEGER NOT NULL,
        summary  TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS research_pages (
        slug     TEXT PRIMARY KEY,
        title    TEXT NOT NULL,
        subtitle TEXT NOT NULL DEFAULT '',
        body     TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS experiences (
        id           SERIAL PRIMARY KEY,
        position     INTEGER NOT NULL,
        role         TEXT NOT NULL,
        organization TEXT NOT NULL,
        location     TEXT NOT NULL DEFAULT '',
        started      TEXT NOT NULL,
        ended        TEXT NOT NULL,
        description  TEXT NOT NULL DEFAULT ''
    )
    "#,
];

/// Which content sections `seed_if_empty` filled in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: Vec<&'static str>,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.seeded.is_empty()
    }
}

/// PostgreSQL-backed store. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self> {
        Ok(Self::new(create_pool(database_url).await?))
    }

    /// Creates every table that does not exist yet. Safe to run on each boot.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        info!("Schema ready ({} tables)", SCHEMA.len());
        Ok(())
    }

    /// Inserts default rows into each content section that is still empty.
    /// Sections that already hold rows are left alone, so a second run is a no-op.
    pub async fn seed_if_empty(&self) -> StoreResult<SeedReport> {
        let mut tx = self.pool.begin().await?;
        let mut report = SeedReport::default();

        if table_is_empty(&mut tx, "site_settings").await? {
            seed_settings(&mut tx).await?;
            report.seeded.push("settings");
        }
        if table_is_empty(&mut tx, "about_paragraphs").await? {
            seed_about(&mut tx).await?;
            report.seeded.push("about");
        }
        if table_is_empty(&mut tx, "skill_groups").await? {
            seed_skills(&mut tx).await?;
            report.seeded.push("skills");
        }
        if table_is_empty(&mut tx, "trust_badges").await? {
            seed_badges(&mut tx).await?;
            report.seeded.push("badges");
        }
        if table_is_empty(&mut tx, "blog_posts").await? {
            seed_blog_posts(&mut tx).await?;
            report.seeded.push("blog");
        }
        if table_is_empty(&mut tx, "research_items").await? {
            seed_research_items(&mut tx).await?;
            report.seeded.push("research");
        }
        if table_is_empty(&mut tx, "research_pages").await? {
            seed_research_pages(&mut tx).await?;
            report.seeded.push("research pages");
        }
        if table_is_empty(&mut tx, "experiences").await? {
            seed_experiences(&mut tx).await?;
            report.seeded.push("experiences");
        }

        tx.commit().await?;
        Ok(report)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reads
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ContentStore for PgContentStore {
    async fn get_settings(&self) -> StoreResult<Settings> {
        let settings: Settings = sqlx::query_as(
            "SELECT name, tagline, email, location, github_url, linkedin_url \
             FROM site_settings WHERE id = 1",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(settings)
    }

    async fn list_about_paragraphs(&self) -> StoreResult<Vec<String>> {
        let paragraphs: Vec<String> =
            sqlx::query_scalar("SELECT body FROM about_paragraphs ORDER BY position, id")
                .fetch_all(&self.pool)
                .await?;
        Ok(paragraphs)
    }

    async fn list_skill_groups(&self) -> StoreResult<Vec<SkillGroup>> {
        let groups: Vec<SkillGroup> = sqlx::query_as(
            r#"
            SELECT g.name,
                   COALESCE(
                       array_agg(s.name ORDER BY s.position, s.id) FILTER (WHERE s.id IS NOT NULL),
                       '{}'
                   ) AS skills
            FROM skill_groups g
            LEFT JOIN skills s ON s.group_id = g.id
            GROUP BY g.id, g.name, g.position
            ORDER BY g.position, g.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(groups)
    }

    async fn list_trust_badges(&self) -> StoreResult<Vec<Badge>> {
        let badges: Vec<Badge> =
            sqlx::query_as("SELECT label, detail FROM trust_badges ORDER BY position, id")
                .fetch_all(&self.pool)
                .await?;
        Ok(badges)
    }

    async fn list_blog_posts(&self) -> StoreResult<Vec<BlogPost>> {
        let posts: Vec<BlogPost> = sqlx::query_as(
            "SELECT slug, title, published_on, summary, body \
             FROM blog_posts ORDER BY published_on DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    async fn list_research_items(&self) -> StoreResult<Vec<ResearchItem>> {
        let items: Vec<ResearchItem> = sqlx::query_as(
            "SELECT slug, title, venue, year, summary \
             FROM research_items ORDER BY position, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn get_research_page(&self, slug: &str) -> StoreResult<ResearchPage> {
        let page: Option<ResearchPage> = sqlx::query_as(
            "SELECT slug, title, subtitle, body FROM research_pages WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        page.ok_or_else(|| StoreError::NotFound {
            what: format!("research page '{slug}'"),
        })
    }

    async fn list_experiences(&self) -> StoreResult<Vec<Experience>> {
        let experiences: Vec<Experience> = sqlx::query_as(
            "SELECT role, organization, location, started, ended, description \
             FROM experiences ORDER BY position, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(experiences)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Seeding
// ────────────────────────────────────────────────────────────────────────────

/// `table` is always one of the fixed names above, never user input.
async fn table_is_empty(conn: &mut PgConnection, table: &str) -> StoreResult<bool> {
    let sql = format!("SELECT NOT EXISTS (SELECT 1 FROM {table})");
    let empty: bool = sqlx::query_scalar(&sql).fetch_one(&mut *conn).await?;
    Ok(empty)
}

async fn seed_settings(conn: &mut PgConnection) -> StoreResult<()> {
    let s = &seed::SETTINGS;
    sqlx::query(
        r#"
        INSERT INTO site_settings (id, name, tagline, email, location, github_url, linkedin_url)
        VALUES (1, $1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(s.name)
    .bind(s.tagline)
    .bind(s.email)
    .bind(s.location)
    .bind(s.github_url)
    .bind(s.linkedin_url)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

async fn seed_about(conn: &mut PgConnection) -> StoreResult<()> {
    for (position, body) in seed::ABOUT.iter().enumerate() {
        sqlx::query("INSERT INTO about_paragraphs (position, body) VALUES ($1, $2)")
            .bind(position as i32)
            .bind(*body)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn seed_skills(conn: &mut PgConnection) -> StoreResult<()> {
    for (position, group) in seed::SKILL_GROUPS.iter().enumerate() {
        let group_id: i32 = sqlx::query_scalar(
            "INSERT INTO skill_groups (position, name) VALUES ($1, $2) RETURNING id",
        )
        .bind(position as i32)
        .bind(group.name)
        .fetch_one(&mut *conn)
        .await?;

        for (skill_position, skill) in group.skills.iter().enumerate() {
            sqlx::query("INSERT INTO skills (group_id, position, name) VALUES ($1, $2, $3)")
                .bind(group_id)
                .bind(skill_position as i32)
                .bind(*skill)
                .execute(&mut *conn)
                .await?;
        }
    }
    Ok(())
}

async fn seed_badges(conn: &mut PgConnection) -> StoreResult<()> {
    for (position, badge) in seed::BADGES.iter().enumerate() {
        sqlx::query("INSERT INTO trust_badges (position, label, detail) VALUES ($1, $2, $3)")
            .bind(position as i32)
            .bind(badge.label)
            .bind(badge.detail)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn seed_blog_posts(conn: &mut PgConnection) -> StoreResult<()> {
    for post in seed::BLOG_POSTS {
        sqlx::query(
            r#"
            INSERT INTO blog_posts (slug, title, published_on, summary, body)
            VALUES ($1, $2, $3::date, $4, $5)
            "#,
        )
        .bind(post.slug)
        .bind(post.title)
        .bind(post.published_on)
        .bind(post.summary)
        .bind(post.body)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

async fn seed_research_items(conn: &mut PgConnection) -> StoreResult<()> {
    for (position, item) in seed::RESEARCH.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO research_items (position, slug, title, venue, year, summary)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(position as i32)
        .bind(item.slug)
        .bind(item.title)
        .bind(item.venue)
        .bind(item.year)
        .bind(item.summary)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

async fn seed_research_pages(conn: &mut PgConnection) -> StoreResult<()> {
    for item in seed::RESEARCH {
        sqlx::query(
            "INSERT INTO research_pages (slug, title, subtitle, body) VALUES ($1, $2, $3, $4)",
        )
        .bind(item.slug)
        .bind(item.title)
        .bind(item.subtitle)
        .bind(item.body)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

async fn seed_experiences(conn: &mut PgConnection) -> StoreResult<()> {
    for (position, exp) in seed::EXPERIENCES.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO experiences
                (position, role, organization, location, started, ended, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(position as i32)
        .bind(exp.role)
        .bind(exp.organization)
        .bind(exp.location)
        .bind(exp.started)
        .bind(exp.ended)
        .bind(exp.description)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

/// These run against a real database and are skipped unless
/// `TEST_DATABASE_URL` points at a scratch PostgreSQL instance.
#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: &[&str] = &[
        "site_settings",
        "about_paragraphs",
        "skill_groups",
        "skills",
        "trust_badges",
        "blog_posts",
        "research_items",
        "research_pages",
        "experiences",
    ];

    async fn scratch_store() -> Option<PgContentStore> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let store = PgContentStore::connect(&url).await.unwrap();
        store.ensure_schema().await.unwrap();
        Some(store)
    }

    async fn row_counts(store: &PgContentStore) -> Vec<i64> {
        let mut counts = Vec::new();
        for table in TABLES {
            let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&store.pool)
                .await
                .unwrap();
            counts.push(count);
        }
        counts
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let Some(store) = scratch_store().await else {
            return;
        };
        store.ensure_schema().await.unwrap();
        store.ensure_schema().await.unwrap();
    }

    #[tokio::test]
    async fn test_seed_twice_leaves_row_counts_unchanged() {
        let Some(store) = scratch_store().await else {
            return;
        };
        store.seed_if_empty().await.unwrap();
        let before = row_counts(&store).await;

        let report = store.seed_if_empty().await.unwrap();
        assert!(report.is_empty(), "second seed inserted {:?}", report.seeded);
        assert_eq!(row_counts(&store).await, before);
    }

    #[tokio::test]
    async fn test_seeded_store_serves_every_section() {
        let Some(store) = scratch_store().await else {
            return;
        };
        store.seed_if_empty().await.unwrap();

        let settings = store.get_settings().await.unwrap();
        assert!(!settings.name.is_empty());
        assert!(store.list_about_paragraphs().await.unwrap().len() >= seed::ABOUT.len());
        assert!(store.list_trust_badges().await.unwrap().len() >= seed::BADGES.len());
        assert!(store.list_blog_posts().await.unwrap().len() >= seed::BLOG_POSTS.len());
        assert!(store.list_research_items().await.unwrap().len() >= seed::RESEARCH.len());
        assert!(store.list_experiences().await.unwrap().len() >= seed::EXPERIENCES.len());

        let groups = store.list_skill_groups().await.unwrap();
        assert!(groups.len() >= seed::SKILL_GROUPS.len());
        assert!(groups.iter().all(|g| !g.skills.is_empty()));
    }

    #[tokio::test]
    async fn test_research_page_lookup() {
        let Some(store) = scratch_store().await else {
            return;
        };
        store.seed_if_empty().await.unwrap();

        let slug = seed::RESEARCH[0].slug;
        let page = store.get_research_page(slug).await.unwrap();
        assert_eq!(page.slug, slug);

        let missing = store.get_research_page("no-such-paper").await;
        assert!(matches!(missing, Err(StoreError::NotFound { .. })));

        let empty = store.get_research_page("").await;
        assert!(matches!(empty, Err(StoreError::NotFound { .. })));
    }
}

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Site-wide singleton shown in every page header and footer.
#[derive(Debug, Clone, Default, Serialize, FromRow)]
pub struct Settings {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    pub github_url: String,
    pub linkedin_url: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Badge {
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub published_on: NaiveDate,
    pub summary: String,
    /// Trusted HTML, rendered through `safe_html`.
    pub body: String,
}

/// Summary row listed on the research index.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ResearchItem {
    pub slug: String,
    pub title: String,
    pub venue: String,
    pub year: i32,
    pub summary: String,
}

/// Full write-up behind `/research-<slug>.html`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ResearchPage {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub location: String,
    pub started: String,
    pub ended: String,
    pub description: String,
}

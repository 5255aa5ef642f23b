pub mod handlers;

use serde::Serialize;

use crate::models::content::{
    Badge, BlogPost, Experience, ResearchItem, ResearchPage, Settings, SkillGroup,
};

const RESEARCH_DETAIL_PREFIX: &str = "/research-";
const RESEARCH_DETAIL_SUFFIX: &str = ".html";

/// The five pages the site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Blog,
    Research,
    Resume,
    ResearchDetail,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Index,
        Page::Blog,
        Page::Research,
        Page::Resume,
        Page::ResearchDetail,
    ];

    /// File name under the templates directory, also the name it is registered under.
    pub fn template_name(self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Blog => "blog.html",
            Page::Research => "research.html",
            Page::Resume => "resume.html",
            Page::ResearchDetail => "research_detail.html",
        }
    }

    pub fn active_tab(self) -> ActiveTab {
        match self {
            Page::Index => ActiveTab::About,
            Page::Blog => ActiveTab::Blog,
            Page::Research | Page::ResearchDetail => ActiveTab::Research,
            Page::Resume => ActiveTab::Resume,
        }
    }
}

/// Navigation section highlighted in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    About,
    Blog,
    Research,
    Resume,
}

/// Everything a page template can see. Sections a page does not use stay empty.
#[derive(Debug, Serialize)]
pub struct PageData {
    pub active_tab: ActiveTab,
    pub settings: Settings,
    pub about: Vec<String>,
    pub skills: Vec<SkillGroup>,
    pub badges: Vec<Badge>,
    pub blog_posts: Vec<BlogPost>,
    pub research_items: Vec<ResearchItem>,
    pub research_page: Option<ResearchPage>,
    pub experiences: Vec<Experience>,
}

impl PageData {
    pub fn new(active_tab: ActiveTab, settings: Settings) -> Self {
        Self {
            active_tab,
            settings,
            about: Vec::new(),
            skills: Vec::new(),
            badges: Vec::new(),
            blog_posts: Vec::new(),
            research_items: Vec::new(),
            research_page: None,
            experiences: Vec::new(),
        }
    }
}

/// True for paths shaped like `/research-<slug>.html`.
pub fn is_research_detail_path(path: &str) -> bool {
    path.starts_with(RESEARCH_DETAIL_PREFIX) && path.ends_with(RESEARCH_DETAIL_SUFFIX)
}

/// Slug between `/research-` and `.html`. Any other shape gives `""`,
/// which no research page matches.
pub fn research_slug(path: &str) -> &str {
    path.strip_prefix(RESEARCH_DETAIL_PREFIX)
        .and_then(|rest| rest.strip_suffix(RESEARCH_DETAIL_SUFFIX))
        .unwrap_or("")
}

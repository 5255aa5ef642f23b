use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::errors::AppError;
use crate::pages::{is_research_detail_path, research_slug, Page, PageData};
use crate::state::AppState;

/// GET / and /index.html
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let store = &state.store;
    let settings = store.get_settings().await?;
    let about = store.list_about_paragraphs().await?;
    let skills = store.list_skill_groups().await?;
    let badges = store.list_trust_badges().await?;

    let data = PageData {
        about,
        skills,
        badges,
        ..PageData::new(Page::Index.active_tab(), settings)
    };
    render(&state, Page::Index, &data)
}

/// GET /blog and /blog.html
pub async fn handle_blog(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let settings = state.store.get_settings().await?;
    let blog_posts = state.store.list_blog_posts().await?;

    let data = PageData {
        blog_posts,
        ..PageData::new(Page::Blog.active_tab(), settings)
    };
    render(&state, Page::Blog, &data)
}

/// GET /research and /research.html
pub async fn handle_research(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let settings = state.store.get_settings().await?;
    let research_items = state.store.list_research_items().await?;

    let data = PageData {
        research_items,
        ..PageData::new(Page::Research.active_tab(), settings)
    };
    render(&state, Page::Research, &data)
}

/// GET /resume and /resume.html
pub async fn handle_resume(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let store = &state.store;
    let settings = store.get_settings().await?;
    let experiences = store.list_experiences().await?;
    let badges = store.list_trust_badges().await?;
    let skills = store.list_skill_groups().await?;

    let data = PageData {
        experiences,
        badges,
        skills,
        ..PageData::new(Page::Resume.active_tab(), settings)
    };
    render(&state, Page::Resume, &data)
}

/// GET /research/
pub async fn handle_research_slash() -> impl IntoResponse {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, "/research")],
    )
}

/// Everything the route table does not name. Only `/research-<slug>.html`
/// resolves here; the rest is 404.
pub async fn handle_fallback(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, AppError> {
    let path = uri.path();
    if !is_research_detail_path(path) {
        return Err(AppError::NotFound);
    }
    if method != Method::GET && method != Method::HEAD {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    let page = research_detail(&state, research_slug(path)).await?;
    Ok(page.into_response())
}

/// GET /research-<slug>.html
async fn research_detail(state: &AppState, slug: &str) -> Result<Html<String>, AppError> {
    let settings = state.store.get_settings().await?;
    let research_page = state.store.get_research_page(slug).await?;

    let data = PageData {
        research_page: Some(research_page),
        ..PageData::new(Page::ResearchDetail.active_tab(), settings)
    };
    render(state, Page::ResearchDetail, &data)
}

fn render(state: &AppState, page: Page, data: &PageData) -> Result<Html<String>, AppError> {
    let html = state.templates.render(page, data)?;
    Ok(Html(html))
}

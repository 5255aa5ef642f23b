use axum::{body::Body, http::Request, routing::get, Router};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, Span};

use crate::pages::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);
    let stylesheet = ServeFile::new(&state.config.stylesheet);

    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/index.html", get(handlers::handle_index))
        .route("/blog", get(handlers::handle_blog))
        .route("/blog.html", get(handlers::handle_blog))
        .route("/research", get(handlers::handle_research))
        .route("/research.html", get(handlers::handle_research))
        .route("/research/", get(handlers::handle_research_slash))
        .route("/resume", get(handlers::handle_resume))
        .route("/resume.html", get(handlers::handle_resume))
        // Static files skip the template layer entirely
        .nest_service("/assets", assets)
        .route_service("/styles.css", stylesheet)
        // `/research-<slug>.html` carries its slug inside a segment, so it is matched here
        .fallback(handlers::handle_fallback)
        .layer(
            TraceLayer::new_for_http()
                .on_request(|req: &Request<Body>, _span: &Span| {
                    info!("{} {}", req.method(), req.uri().path());
                }),
        )
        .with_state(state)
}

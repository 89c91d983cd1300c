// Route exports
pub mod auth;
pub mod catalog;
pub mod matches;

use actix_web::web;
use crate::core::Matcher;
use crate::services::{Catalog, IdentityProvider, SessionManager};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub identity: Arc<dyn IdentityProvider>,
    pub sessions: Arc<SessionManager>,
    pub matcher: Matcher,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(auth::configure)
            .configure(catalog::configure)
            .configure(matches::configure),
    );
}

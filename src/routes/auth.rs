use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, LoginRequest, LoginResponse};
use crate::routes::AppState;
use crate::services::Session;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/auth/login", web::post().to(login))
        .route("/auth/session", web::get().to(current_session));
}

/// Agent login
///
/// POST /api/v1/auth/login
///
/// Request body:
/// ```json
/// { "username": "string", "password": "string" }
/// ```
async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Validation failed", errors.to_string(), 400));
    }

    let identity = match state.identity.verify(&req.username, &req.password) {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!("Rejected login for {}: {}", req.username, e);
            return HttpResponse::Unauthorized().json(ErrorResponse::new("Login failed", e.to_string(), 401));
        }
    };

    match state.sessions.issue(&identity) {
        Ok((token, session)) => {
            tracing::info!("Agent {} logged in", session.username);
            HttpResponse::Ok().json(LoginResponse {
                token,
                username: session.username,
                expires_at: session.expires_at,
            })
        }
        Err(e) => {
            tracing::error!("Failed to issue session for {}: {}", identity.username, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to issue session", e.to_string(), 500))
        }
    }
}

/// GET /api/v1/auth/session
async fn current_session(session: Session) -> impl Responder {
    HttpResponse::Ok().json(session)
}

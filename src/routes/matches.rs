use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::create_recommendation;
use crate::models::{
    CreateRecommendationRequest, ErrorResponse, FindMatchesRequest, FindMatchesResponse,
    HealthResponse,
};
use crate::routes::AppState;
use crate::services::Session;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/clients/{id}/matches", web::get().to(client_matches))
        .route("/recommendations", web::post().to(create_report));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches for ad-hoc criteria
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "budgetRange": { "min": 400000, "max": 600000 },
///   "preferences": { "bedrooms": 3, "bathrooms": 2, "location": "Austin", "propertyType": "House" },
///   "properties": [ ... ]
/// }
/// ```
/// `properties` is optional; the loaded catalog is used when it is absent.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new("Validation failed", errors.to_string(), 400));
    }

    let candidates = req
        .properties
        .as_deref()
        .unwrap_or_else(|| state.catalog.properties());

    let result = state.matcher.find_matches(&req.criteria, candidates);

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        result.matches.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}

/// Matches for a stored client against the loaded catalog
///
/// GET /api/v1/clients/{id}/matches
async fn client_matches(
    _session: Session,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let client_id = path.into_inner();
    let Some(client) = state.catalog.client(&client_id) else {
        return HttpResponse::NotFound().json(ErrorResponse::new(
            "Client not found",
            format!("No client with id {}", client_id),
            404,
        ));
    };

    let result = state.matcher.find_matches(&client.criteria, state.catalog.properties());

    tracing::info!("Returning {} matches for client {}", result.matches.len(), client_id);

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}

/// Create a draft recommendation report
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// { "clientId": "string", "propertyIds": ["string"] }
/// ```
/// Without `propertyIds` the matcher picks the listings.
async fn create_report(
    session: Session,
    state: web::Data<AppState>,
    req: web::Json<CreateRecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Validation failed", errors.to_string(), 400));
    }

    let Some(client) = state.catalog.client(&req.client_id) else {
        return HttpResponse::NotFound().json(ErrorResponse::new(
            "Client not found",
            format!("No client with id {}", req.client_id),
            404,
        ));
    };

    let selected = match &req.property_ids {
        Some(ids) => match state.catalog.properties_by_id(ids) {
            Ok(properties) => Some(properties),
            Err(missing) => {
                return HttpResponse::NotFound().json(ErrorResponse::new(
                    "Property not found",
                    format!("No property with id {}", missing),
                    404,
                ));
            }
        },
        None => None,
    };

    let recommendation = create_recommendation(
        &state.matcher,
        client,
        state.catalog.properties(),
        selected.as_deref(),
    );

    tracing::debug!("Agent {} drafted report {}", session.username, recommendation.id);

    HttpResponse::Created().json(recommendation)
}

use actix_web::{web, HttpResponse, Responder};
use crate::core::{bedroom_options, property_types, ClientFilter, DashboardSummary, PropertyFilter};
use crate::models::{
    ClientListResponse, ClientSearchQuery, ErrorResponse, PropertyListResponse, PropertySearchQuery,
};
use crate::routes::AppState;
use crate::services::Session;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/properties", web::get().to(list_properties))
        .route("/properties/{id}", web::get().to(get_property))
        .route("/clients", web::get().to(list_clients))
        .route("/clients/{id}", web::get().to(get_client))
        .route("/analytics", web::get().to(analytics));
}

/// Property search
///
/// GET /api/v1/properties?q=&minPrice=&maxPrice=&propertyType=&bedrooms=
async fn list_properties(
    state: web::Data<AppState>,
    query: web::Query<PropertySearchQuery>,
) -> impl Responder {
    let filter = PropertyFilter::from(query.into_inner());
    let all = state.catalog.properties();

    let properties: Vec<_> = filter.apply(all).into_iter().cloned().collect();

    tracing::debug!("Property search returned {} of {} listings", properties.len(), all.len());

    HttpResponse::Ok().json(PropertyListResponse {
        total_results: properties.len(),
        properties,
        property_types: property_types(all),
        bedroom_options: bedroom_options(all),
    })
}

/// GET /api/v1/properties/{id}
async fn get_property(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.property(&id) {
        Some(property) => HttpResponse::Ok().json(property),
        None => HttpResponse::NotFound().json(ErrorResponse::new(
            "Property not found",
            format!("No property with id {}", id),
            404,
        )),
    }
}

/// Client search for the CRM list
///
/// GET /api/v1/clients?q=&status=
async fn list_clients(
    _session: Session,
    state: web::Data<AppState>,
    query: web::Query<ClientSearchQuery>,
) -> impl Responder {
    let filter = ClientFilter::from(query.into_inner());
    let clients: Vec<_> = filter
        .apply(state.catalog.clients())
        .into_iter()
        .cloned()
        .collect();

    HttpResponse::Ok().json(ClientListResponse {
        total_results: clients.len(),
        clients,
    })
}

/// GET /api/v1/clients/{id}
async fn get_client(
    _session: Session,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.client(&id) {
        Some(client) => HttpResponse::Ok().json(client),
        None => HttpResponse::NotFound().json(ErrorResponse::new(
            "Client not found",
            format!("No client with id {}", id),
            404,
        )),
    }
}

/// Dashboard figures for the agent analytics page
///
/// GET /api/v1/analytics
async fn analytics(
    _session: Session,
    state: web::Data<AppState>,
) -> impl Responder {
    let summary = DashboardSummary::compute(
        &state.matcher,
        state.catalog.clients(),
        state.catalog.properties(),
    );

    HttpResponse::Ok().json(summary)
}

use axum::{Json, Router, routing::get};

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod doc;
pub mod health;
pub mod params;
pub mod productos;

#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct WelcomeData {
    mensaje: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = ApiResponse<WelcomeData>),
    ),
    tag = "Inicio"
)]
pub async fn welcome() -> Json<ApiResponse<WelcomeData>> {
    let data = WelcomeData {
        mensaje: "Bienvenido a la API de productos".to_string(),
    };
    Json(ApiResponse::success("Welcome", data, Some(Meta::empty())))
}

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health::health_check))
        .nest("/productos", productos::router())
}

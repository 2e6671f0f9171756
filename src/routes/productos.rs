use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::productos::{PatchProductoRequest, ProductoList, ProductoRequest},
    error::AppResult,
    models::Producto,
    response::ApiResponse,
    routes::params::{ListQuery, SearchQuery},
    services::producto_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_productos).post(create_producto))
        .route("/buscar/", get(search_productos))
        .route(
            "/{id}",
            get(get_producto)
                .put(replace_producto)
                .patch(patch_producto)
                .delete(delete_producto),
        )
}

#[utoipa::path(
    get,
    path = "/productos",
    params(
        ("skip" = Option<u64>, Query, description = "Records to skip, default 0"),
        ("limit" = Option<u64>, Query, description = "Max records to return, default 10, max 100"),
        ("disponible" = Option<bool>, Query, description = "Filter by availability"),
    ),
    responses(
        (status = 200, description = "List productos", body = ApiResponse<ProductoList>),
        (status = 400, description = "limit out of range"),
    ),
    tag = "Productos"
)]
pub async fn list_productos(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ApiResponse<ProductoList>>> {
    producto_service::list_productos(&state, query).map(Json)
}

#[utoipa::path(
    get,
    path = "/productos/buscar/",
    params(
        ("q" = String, Query, description = "Search term, at least 2 characters"),
    ),
    responses(
        (status = 200, description = "Productos whose nombre contains the term", body = ApiResponse<ProductoList>),
        (status = 400, description = "Search term too short"),
    ),
    tag = "Productos"
)]
pub async fn search_productos(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<ProductoList>>> {
    producto_service::search_productos(&state, query).map(Json)
}

#[utoipa::path(
    get,
    path = "/productos/{id}",
    params(
        ("id" = u64, Path, description = "Producto ID")
    ),
    responses(
        (status = 200, description = "Get producto", body = ApiResponse<Producto>),
        (status = 404, description = "Producto not found"),
    ),
    tag = "Productos"
)]
pub async fn get_producto(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Producto>>> {
    producto_service::get_producto(&state, id).map(Json)
}

#[utoipa::path(
    post,
    path = "/productos",
    request_body = ProductoRequest,
    responses(
        (status = 201, description = "Create producto", body = ApiResponse<Producto>),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Productos"
)]
pub async fn create_producto(
    State(state): State<AppState>,
    Json(payload): Json<ProductoRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Producto>>)> {
    let response = producto_service::create_producto(&state, payload)?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/productos/{id}",
    params(
        ("id" = u64, Path, description = "Producto ID")
    ),
    request_body = ProductoRequest,
    responses(
        (status = 200, description = "Replaced producto", body = ApiResponse<Producto>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Producto not found"),
    ),
    tag = "Productos"
)]
pub async fn replace_producto(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<ProductoRequest>,
) -> AppResult<Json<ApiResponse<Producto>>> {
    producto_service::replace_producto(&state, id, payload).map(Json)
}

#[utoipa::path(
    patch,
    path = "/productos/{id}",
    params(
        ("id" = u64, Path, description = "Producto ID")
    ),
    request_body = PatchProductoRequest,
    responses(
        (status = 200, description = "Patched producto", body = ApiResponse<Producto>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Producto not found"),
    ),
    tag = "Productos"
)]
pub async fn patch_producto(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<PatchProductoRequest>,
) -> AppResult<Json<ApiResponse<Producto>>> {
    producto_service::patch_producto(&state, id, payload).map(Json)
}

#[utoipa::path(
    delete,
    path = "/productos/{id}",
    params(
        ("id" = u64, Path, description = "Producto ID")
    ),
    responses(
        (status = 200, description = "Deleted producto"),
        (status = 404, description = "Producto not found"),
    ),
    tag = "Productos"
)]
pub async fn delete_producto(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    producto_service::delete_producto(&state, id).map(Json)
}

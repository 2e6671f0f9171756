use crate::{
    dto::productos::{PatchProductoRequest, ProductoList, ProductoRequest},
    error::{AppError, AppResult},
    models::Producto,
    response::{ApiResponse, Meta},
    routes::params::{ListQuery, SearchQuery},
    state::AppState,
};

pub fn list_productos(state: &AppState, query: ListQuery) -> AppResult<ApiResponse<ProductoList>> {
    let (skip, limit) = query.normalize().map_err(AppError::BadRequest)?;
    let (items, total) = state.store.list(skip, limit, query.disponible);

    let meta = Meta::new(skip, limit, total);
    let data = ProductoList { items };
    Ok(ApiResponse::success("Productos", data, Some(meta)))
}

pub fn get_producto(state: &AppState, id: u64) -> AppResult<ApiResponse<Producto>> {
    let producto = match state.store.get(id) {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Producto", producto, None))
}

pub fn create_producto(
    state: &AppState,
    payload: ProductoRequest,
) -> AppResult<ApiResponse<Producto>> {
    payload.validate().map_err(AppError::BadRequest)?;
    let producto = state.store.create(payload.into_fields());

    tracing::debug!(id = producto.id, "producto created");

    Ok(ApiResponse::success(
        "Producto created",
        producto,
        Some(Meta::empty()),
    ))
}

pub fn replace_producto(
    state: &AppState,
    id: u64,
    payload: ProductoRequest,
) -> AppResult<ApiResponse<Producto>> {
    payload.validate().map_err(AppError::BadRequest)?;
    let producto = match state.store.replace(id, payload.into_fields()) {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success(
        "Updated",
        producto,
        Some(Meta::empty()),
    ))
}

pub fn patch_producto(
    state: &AppState,
    id: u64,
    payload: PatchProductoRequest,
) -> AppResult<ApiResponse<Producto>> {
    payload.validate().map_err(AppError::BadRequest)?;
    let producto = match state.store.patch(id, payload.into_patch()) {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success(
        "Updated",
        producto,
        Some(Meta::empty()),
    ))
}

pub fn delete_producto(state: &AppState, id: u64) -> AppResult<ApiResponse<serde_json::Value>> {
    if !state.store.remove(id) {
        return Err(AppError::NotFound);
    }

    tracing::debug!(id, "producto deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub fn search_productos(
    state: &AppState,
    query: SearchQuery,
) -> AppResult<ApiResponse<ProductoList>> {
    query.validate().map_err(AppError::BadRequest)?;
    let items = state.store.search(&query.q);

    let data = ProductoList { items };
    Ok(ApiResponse::success("Productos", data, Some(Meta::empty())))
}

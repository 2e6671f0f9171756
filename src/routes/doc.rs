use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::productos::{PatchProductoRequest, ProductoList, ProductoRequest},
    models::Producto,
    response::{ApiResponse, Meta},
    routes::{self, health, params, productos},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::welcome,
        health::health_check,
        productos::list_productos,
        productos::search_productos,
        productos::create_producto,
        productos::get_producto,
        productos::replace_producto,
        productos::patch_producto,
        productos::delete_producto,
    ),
    components(
        schemas(
            Producto,
            ProductoRequest,
            PatchProductoRequest,
            ProductoList,
            params::ListQuery,
            params::SearchQuery,
            routes::WelcomeData,
            health::HealthData,
            Meta,
            ApiResponse<Producto>,
            ApiResponse<ProductoList>,
        )
    ),
    tags(
        (name = "Inicio", description = "Welcome endpoint"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Productos", description = "Producto CRUD and search endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

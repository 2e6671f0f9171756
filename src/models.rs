use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog product. Field names are Spanish because they are the public
/// wire contract of the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Producto {
    pub id: u64,
    #[schema(example = "Smartphone XYZ")]
    pub nombre: String,
    pub descripcion: Option<String>,
    #[schema(example = 599.99)]
    pub precio: f64,
    pub disponible: bool,
    pub categorias: Vec<String>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: Option<DateTime<Utc>>,
}

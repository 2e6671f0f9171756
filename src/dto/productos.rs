use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Producto;
use crate::store::{ProductoFields, ProductoPatch};

const NOMBRE_MIN: usize = 3;
const NOMBRE_MAX: usize = 50;
const DESCRIPCION_MAX: usize = 200;

/// Payload for POST and PUT: the full record sans id and timestamps.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductoRequest {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(default = "default_disponible")]
    pub disponible: bool,
    #[serde(default)]
    pub categorias: Vec<String>,
}

fn default_disponible() -> bool {
    true
}

impl ProductoRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_nombre(&self.nombre)?;
        if let Some(descripcion) = &self.descripcion {
            validate_descripcion(descripcion)?;
        }
        validate_precio(self.precio)?;
        Ok(())
    }

    pub fn into_fields(self) -> ProductoFields {
        ProductoFields {
            nombre: self.nombre,
            descripcion: self.descripcion,
            precio: self.precio,
            disponible: self.disponible,
            categorias: self.categorias,
        }
    }
}

/// Payload for PATCH: every field optional, absent fields stay untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchProductoRequest {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<f64>,
    pub disponible: Option<bool>,
    pub categorias: Option<Vec<String>>,
}

impl PatchProductoRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(nombre) = &self.nombre {
            validate_nombre(nombre)?;
        }
        if let Some(descripcion) = &self.descripcion {
            validate_descripcion(descripcion)?;
        }
        if let Some(precio) = self.precio {
            validate_precio(precio)?;
        }
        Ok(())
    }

    pub fn into_patch(self) -> ProductoPatch {
        ProductoPatch {
            nombre: self.nombre,
            descripcion: self.descripcion,
            precio: self.precio,
            disponible: self.disponible,
            categorias: self.categorias,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductoList {
    #[schema(value_type = Vec<Producto>)]
    pub items: Vec<Producto>,
}

fn validate_nombre(nombre: &str) -> Result<(), String> {
    let len = nombre.chars().count();
    if !(NOMBRE_MIN..=NOMBRE_MAX).contains(&len) {
        return Err(format!(
            "nombre must be between {NOMBRE_MIN} and {NOMBRE_MAX} characters"
        ));
    }
    Ok(())
}

fn validate_descripcion(descripcion: &str) -> Result<(), String> {
    if descripcion.chars().count() > DESCRIPCION_MAX {
        return Err(format!(
            "descripcion must be at most {DESCRIPCION_MAX} characters"
        ));
    }
    Ok(())
}

fn validate_precio(precio: f64) -> Result<(), String> {
    if precio.is_nan() || precio <= 0.0 {
        return Err("precio must be greater than 0".to_string());
    }
    Ok(())
}

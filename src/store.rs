use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::models::Producto;

/// Field set shared by create and full replace. The store stamps id and
/// timestamps itself.
#[derive(Debug, Clone)]
pub struct ProductoFields {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub disponible: bool,
    pub categorias: Vec<String>,
}

/// Partial update: only `Some` fields are merged onto the stored record.
#[derive(Debug, Clone, Default)]
pub struct ProductoPatch {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<f64>,
    pub disponible: Option<bool>,
    pub categorias: Option<Vec<String>>,
}

#[derive(Debug, Default)]
struct Inner {
    productos: BTreeMap<u64, Producto>,
    next_id: u64,
}

/// In-memory product store. A single `RwLock` serializes mutations, which is
/// what keeps id assignment unique under concurrent requests. Cloning the
/// store clones the handle, not the data.
#[derive(Clone, Default)]
pub struct ProductoStore {
    inner: Arc<RwLock<Inner>>,
}

impl ProductoStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// List in ascending id order. The availability filter applies before
    /// pagination; the returned total is the size of the filtered set.
    pub fn list(&self, skip: u64, limit: u64, disponible: Option<bool>) -> (Vec<Producto>, u64) {
        let inner = self.read();
        let filtered: Vec<&Producto> = inner
            .productos
            .values()
            .filter(|p| disponible.is_none_or(|d| p.disponible == d))
            .collect();
        let total = filtered.len() as u64;
        let items = filtered
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        (items, total)
    }

    pub fn get(&self, id: u64) -> Option<Producto> {
        self.read().productos.get(&id).cloned()
    }

    /// Insert a new record under the next id. Ids are monotonic and never
    /// reused after a delete.
    pub fn create(&self, fields: ProductoFields) -> Producto {
        let mut inner = self.write();
        inner.next_id += 1;
        let producto = Producto {
            id: inner.next_id,
            nombre: fields.nombre,
            descripcion: fields.descripcion,
            precio: fields.precio,
            disponible: fields.disponible,
            categorias: fields.categorias,
            fecha_creacion: Utc::now(),
            fecha_actualizacion: None,
        };
        inner.productos.insert(producto.id, producto.clone());
        producto
    }

    /// Full replace. Keeps the original id and creation timestamp; returns
    /// `None` (and stores nothing) when the id does not exist.
    pub fn replace(&self, id: u64, fields: ProductoFields) -> Option<Producto> {
        let mut inner = self.write();
        let existing = inner.productos.get_mut(&id)?;
        existing.nombre = fields.nombre;
        existing.descripcion = fields.descripcion;
        existing.precio = fields.precio;
        existing.disponible = fields.disponible;
        existing.categorias = fields.categorias;
        existing.fecha_actualizacion = Some(Utc::now());
        Some(existing.clone())
    }

    /// Merge the supplied fields onto the stored record, leaving the rest
    /// untouched.
    pub fn patch(&self, id: u64, patch: ProductoPatch) -> Option<Producto> {
        let mut inner = self.write();
        let existing = inner.productos.get_mut(&id)?;
        if let Some(nombre) = patch.nombre {
            existing.nombre = nombre;
        }
        if let Some(descripcion) = patch.descripcion {
            existing.descripcion = Some(descripcion);
        }
        if let Some(precio) = patch.precio {
            existing.precio = precio;
        }
        if let Some(disponible) = patch.disponible {
            existing.disponible = disponible;
        }
        if let Some(categorias) = patch.categorias {
            existing.categorias = categorias;
        }
        existing.fecha_actualizacion = Some(Utc::now());
        Some(existing.clone())
    }

    /// Returns false when the id was not present.
    pub fn remove(&self, id: u64) -> bool {
        self.write().productos.remove(&id).is_some()
    }

    /// Case-insensitive substring match on `nombre`, ascending id order.
    pub fn search(&self, term: &str) -> Vec<Producto> {
        let needle = term.to_lowercase();
        self.read()
            .productos
            .values()
            .filter(|p| p.nombre.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().productos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().productos.is_empty()
    }

    /// Demo catalog so a fresh instance has something to browse.
    pub fn seed_demo(&self) {
        let demo = [
            ProductoFields {
                nombre: "Laptop Pro".to_string(),
                descripcion: Some("Laptop de alta gama para profesionales".to_string()),
                precio: 1299.99,
                disponible: true,
                categorias: vec!["Electrónica".to_string(), "Computadoras".to_string()],
            },
            ProductoFields {
                nombre: "Smartphone Galaxy".to_string(),
                descripcion: Some("Smartphone con cámara de alta resolución".to_string()),
                precio: 899.99,
                disponible: true,
                categorias: vec!["Electrónica".to_string(), "Móviles".to_string()],
            },
            ProductoFields {
                nombre: "Auriculares Noise-Cancelling".to_string(),
                descripcion: Some("Auriculares con cancelación de ruido".to_string()),
                precio: 249.99,
                disponible: false,
                categorias: vec!["Electrónica".to_string(), "Audio".to_string()],
            },
        ];
        for fields in demo {
            self.create(fields);
        }
    }
}

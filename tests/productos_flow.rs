use productos_api::{
    dto::productos::{PatchProductoRequest, ProductoRequest},
    error::AppError,
    routes::params::{ListQuery, SearchQuery},
    services::producto_service,
    state::AppState,
};

fn producto_request(nombre: &str, precio: f64, disponible: bool) -> ProductoRequest {
    ProductoRequest {
        nombre: nombre.to_string(),
        descripcion: None,
        precio,
        disponible,
        categorias: Vec::new(),
    }
}

fn list_query(skip: Option<u64>, limit: Option<u64>, disponible: Option<bool>) -> ListQuery {
    ListQuery {
        skip,
        limit,
        disponible,
    }
}

#[test]
fn create_then_get_returns_created_record() {
    let state = AppState::new();

    let created = producto_service::create_producto(
        &state,
        producto_request("Smartphone X", 599.99, true),
    )
    .expect("create")
    .data
    .expect("created producto");

    assert_eq!(created.id, 1);
    assert_eq!(created.nombre, "Smartphone X");
    assert!(created.fecha_actualizacion.is_none());

    let fetched = producto_service::get_producto(&state, created.id)
        .expect("get")
        .data
        .expect("fetched producto");
    assert_eq!(fetched, created);
}

#[test]
fn get_missing_id_is_not_found() {
    let state = AppState::new();
    let err = producto_service::get_producto(&state, 42).unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[test]
fn delete_then_get_is_not_found() {
    let state = AppState::new();
    let created = producto_service::create_producto(
        &state,
        producto_request("Teclado mecánico", 79.99, true),
    )
    .expect("create")
    .data
    .expect("producto");

    producto_service::delete_producto(&state, created.id).expect("delete");

    let err = producto_service::get_producto(&state, created.id).unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    let err = producto_service::delete_producto(&state, created.id).unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[test]
fn list_applies_skip_limit_and_filter() {
    let state = AppState::new();
    for i in 0..15 {
        producto_service::create_producto(
            &state,
            producto_request(&format!("Producto {i:02}"), 10.0 + i as f64, i % 2 == 0),
        )
        .expect("create");
    }

    // Default limit is 10.
    let response = producto_service::list_productos(&state, ListQuery::default()).expect("list");
    let items = response.data.expect("items").items;
    assert_eq!(items.len(), 10);
    let meta = response.meta.expect("meta");
    assert_eq!(meta.total, Some(15));

    // skip excludes the first N of the ordered set.
    let response =
        producto_service::list_productos(&state, list_query(Some(12), None, None)).expect("list");
    let items = response.data.expect("items").items;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].nombre, "Producto 12");

    // Availability filter applies before pagination.
    let response =
        producto_service::list_productos(&state, list_query(None, Some(100), Some(false)))
            .expect("list");
    let items = response.data.expect("items").items;
    assert_eq!(items.len(), 7);
    assert!(items.iter().all(|p| !p.disponible));
}

#[test]
fn list_rejects_limit_out_of_range() {
    let state = AppState::new();
    let err =
        producto_service::list_productos(&state, list_query(None, Some(101), None)).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err =
        producto_service::list_productos(&state, list_query(None, Some(0), None)).unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[test]
fn patch_merges_only_supplied_fields() {
    let state = AppState::new();
    let created = producto_service::create_producto(
        &state,
        ProductoRequest {
            nombre: "Monitor 4K".to_string(),
            descripcion: Some("Monitor de 27 pulgadas".to_string()),
            precio: 399.99,
            disponible: true,
            categorias: vec!["Electrónica".to_string()],
        },
    )
    .expect("create")
    .data
    .expect("producto");

    let patched = producto_service::patch_producto(
        &state,
        created.id,
        PatchProductoRequest {
            precio: Some(349.99),
            ..Default::default()
        },
    )
    .expect("patch")
    .data
    .expect("producto");

    assert_eq!(patched.precio, 349.99);
    assert_eq!(patched.nombre, created.nombre);
    assert_eq!(patched.descripcion, created.descripcion);
    assert_eq!(patched.categorias, created.categorias);
    assert_eq!(patched.disponible, created.disponible);
    assert_eq!(patched.fecha_creacion, created.fecha_creacion);
    assert!(patched.fecha_actualizacion.is_some());
}

#[test]
fn patch_missing_id_is_not_found() {
    let state = AppState::new();
    let err = producto_service::patch_producto(
        &state,
        7,
        PatchProductoRequest {
            disponible: Some(false),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[test]
fn replace_missing_id_is_not_found_and_creates_nothing() {
    let state = AppState::new();
    let err = producto_service::replace_producto(
        &state,
        9,
        producto_request("Producto fantasma", 1.0, true),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert!(state.store.is_empty());
}

#[test]
fn replace_keeps_id_and_creation_timestamp() {
    let state = AppState::new();
    let created = producto_service::create_producto(
        &state,
        producto_request("Tablet Air", 499.99, true),
    )
    .expect("create")
    .data
    .expect("producto");

    let replaced = producto_service::replace_producto(
        &state,
        created.id,
        ProductoRequest {
            nombre: "Tablet Air 2".to_string(),
            descripcion: Some("Segunda generación".to_string()),
            precio: 549.99,
            disponible: false,
            categorias: vec!["Electrónica".to_string(), "Tablets".to_string()],
        },
    )
    .expect("replace")
    .data
    .expect("producto");

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.fecha_creacion, created.fecha_creacion);
    assert_eq!(replaced.nombre, "Tablet Air 2");
    assert!(!replaced.disponible);
    assert!(replaced.fecha_actualizacion.is_some());
}

#[test]
fn search_rejects_short_query() {
    let state = AppState::new();
    let err = producto_service::search_productos(
        &state,
        SearchQuery {
            q: "s".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[test]
fn search_matches_substring_case_insensitively() {
    let state = AppState::new();
    producto_service::create_producto(&state, producto_request("Smartphone Galaxy", 899.99, true))
        .expect("create");
    producto_service::create_producto(&state, producto_request("Laptop Pro", 1299.99, true))
        .expect("create");
    producto_service::create_producto(&state, producto_request("SMARTWATCH Fit", 199.99, true))
        .expect("create");

    let results = producto_service::search_productos(
        &state,
        SearchQuery {
            q: "smart".to_string(),
        },
    )
    .expect("search")
    .data
    .expect("items")
    .items;

    assert_eq!(results.len(), 2);
    assert!(
        results
            .iter()
            .all(|p| p.nombre.to_lowercase().contains("smart"))
    );
}

#[test]
fn create_rejects_invalid_payloads() {
    let state = AppState::new();

    let err = producto_service::create_producto(&state, producto_request("ab", 10.0, true))
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err =
        producto_service::create_producto(&state, producto_request("Cargador", 0.0, true))
            .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    assert!(state.store.is_empty());
}

// The worked example from the API docs: create, fetch, search, delete.
#[test]
fn end_to_end_example_flow() {
    let state = AppState::new();

    let created = producto_service::create_producto(
        &state,
        producto_request("Smartphone X", 599.99, true),
    )
    .expect("create")
    .data
    .expect("producto");
    assert_eq!(created.id, 1);

    let fetched = producto_service::get_producto(&state, 1)
        .expect("get")
        .data
        .expect("producto");
    assert_eq!(fetched, created);

    let found = producto_service::search_productos(
        &state,
        SearchQuery {
            q: "Smart".to_string(),
        },
    )
    .expect("search")
    .data
    .expect("items")
    .items;
    assert!(found.iter().any(|p| p.id == created.id));

    producto_service::delete_producto(&state, 1).expect("delete");
    let err = producto_service::get_producto(&state, 1).unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

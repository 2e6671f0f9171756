use productos_api::store::{ProductoFields, ProductoPatch, ProductoStore};

fn fields(nombre: &str, disponible: bool) -> ProductoFields {
    ProductoFields {
        nombre: nombre.to_string(),
        descripcion: None,
        precio: 9.99,
        disponible,
        categorias: Vec::new(),
    }
}

#[test]
fn ids_are_monotonic_and_never_reused() {
    let store = ProductoStore::new();
    let a = store.create(fields("Uno", true));
    let b = store.create(fields("Dos", true));
    assert_eq!((a.id, b.id), (1, 2));

    assert!(store.remove(b.id));
    let c = store.create(fields("Tres", true));
    assert_eq!(c.id, 3);
    assert!(store.get(b.id).is_none());
}

#[test]
fn list_is_ordered_by_ascending_id() {
    let store = ProductoStore::new();
    for i in 0..5 {
        store.create(fields(&format!("Producto {i}"), true));
    }
    let (items, total) = store.list(0, 100, None);
    assert_eq!(total, 5);
    let ids: Vec<u64> = items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn list_total_counts_the_filtered_set() {
    let store = ProductoStore::new();
    for i in 0..6 {
        store.create(fields(&format!("Producto {i}"), i % 3 == 0));
    }
    let (items, total) = store.list(1, 1, Some(true));
    assert_eq!(total, 2);
    assert_eq!(items.len(), 1);
    assert!(items[0].disponible);
}

#[test]
fn patch_with_empty_body_still_stamps_update_time() {
    let store = ProductoStore::new();
    let created = store.create(fields("Parlante", true));
    let patched = store
        .patch(created.id, ProductoPatch::default())
        .expect("patch");
    assert_eq!(patched.nombre, created.nombre);
    assert!(patched.fecha_actualizacion.is_some());
}

#[test]
fn seed_demo_loads_the_catalog() {
    let store = ProductoStore::new();
    store.seed_demo();
    assert_eq!(store.len(), 3);

    let hits = store.search("laptop");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].nombre, "Laptop Pro");

    let (_, disponibles) = store.list(0, 10, Some(true));
    assert_eq!(disponibles, 2);
}

pub mod producto_service;

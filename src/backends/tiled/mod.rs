mod tiled_backend;

pub use tiled_backend::TiledBackend;

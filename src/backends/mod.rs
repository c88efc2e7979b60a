pub mod cpu;
pub mod create_backend;
pub mod tiled;

pub use cpu::CpuBackend;
pub use create_backend::*;
pub use tiled::TiledBackend;

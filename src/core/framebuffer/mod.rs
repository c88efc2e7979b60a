pub mod tiled_framebuffer;
pub mod viewport;

pub use tiled_framebuffer::*;
pub use viewport::*;

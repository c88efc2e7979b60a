pub mod control;
pub mod double_buffer;
pub mod frame;
pub mod observer;
pub mod render_loop;

pub use control::*;
pub use double_buffer::*;
pub use frame::Frame;
pub use observer::*;
pub use render_loop::RenderSession;

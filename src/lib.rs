pub mod backends;
pub mod core;
pub mod displays;

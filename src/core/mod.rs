pub mod backend;
pub mod base;
pub mod camera;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod imageio;
pub mod misc;
pub mod options;
pub mod quaternion;
pub mod rasteriser;
pub mod render;
pub mod rng;
pub mod scene;
pub mod transform;

pub mod cpu_rasteriser;
pub mod footprint;
pub mod tile_binning;
pub mod visibility;

pub use cpu_rasteriser::*;
pub use footprint::*;
pub use tile_binning::*;
pub use visibility::*;

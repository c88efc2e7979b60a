pub mod final_image;
pub mod sequential;

pub use final_image::FinalImageDisplay;
pub use sequential::SequentialDisplay;

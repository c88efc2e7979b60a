mod final_image_display;

pub use final_image_display::FinalImageDisplay;

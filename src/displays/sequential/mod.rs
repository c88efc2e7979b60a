mod sequential_display;

pub use sequential_display::SequentialDisplay;

pub mod progressreporter;

pub use progressreporter::*;

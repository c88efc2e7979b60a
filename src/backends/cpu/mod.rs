mod cpu_backend;

pub use cpu_backend::CpuBackend;

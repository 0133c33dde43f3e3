pub mod context;
pub mod cpu;

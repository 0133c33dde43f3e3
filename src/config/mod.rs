pub mod attrs;
pub mod color;

pub mod generate;
pub mod particle;

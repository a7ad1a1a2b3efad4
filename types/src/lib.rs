pub mod config;
pub mod primitives;

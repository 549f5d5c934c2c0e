// src/core/mod.rs

pub mod classifier;
pub mod engine;
pub mod segmenter;
pub mod tables;
pub mod types;

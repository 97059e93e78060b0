//! Core computation modules

pub mod engine;

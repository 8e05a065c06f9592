//! Identifier sampling without repeats.

pub mod sampler;

pub use sampler::{remaining, Sampler};

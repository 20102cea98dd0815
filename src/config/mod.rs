//! Configuration and path management for SpendLens

pub mod paths;

pub use paths::LensPaths;

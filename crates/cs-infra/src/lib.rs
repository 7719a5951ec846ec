//! # cs-infra
//!
//! Infrastructure implementations of the `cs-core` ports: content hashing,
//! format normalizers, file access, object stores and configuration loading.

pub mod config;
pub mod fs;
pub mod gcs;
pub mod hashing;
pub mod normalize;

pub use hashing::Md5Hasher;
pub use normalize::FormatNormalizer;

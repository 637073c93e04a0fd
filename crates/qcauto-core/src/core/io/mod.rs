//! Provides input/output functionality for molecular geometry file formats.
//!
//! Formats implement the [`traits::GeometryFile`] trait, which supplies path-based
//! helpers on top of reader/writer based parsing and serialization.

pub mod traits;
pub mod xyz;

//! # Models Module
//!
//! Molecular data structures handed to quantum-chemistry jobs.
//!
//! - [`geometry`] - A molecule as an ordered list of atoms with Cartesian positions,
//!   plus its total charge and spin multiplicity

pub mod geometry;

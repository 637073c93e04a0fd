//! # Core Module
//!
//! Stateless building blocks shared by every job: chemical element reference data,
//! molecular geometries, geometry file formats and program input templates.
//!
//! ## Architecture
//!
//! - **Element Data** ([`elements`]) - The periodic table, element records and symbols
//! - **Molecular Representation** ([`models`]) - Geometries built from table elements
//! - **File I/O** ([`io`]) - Reading and writing geometry file formats
//! - **Input Templates** ([`templates`]) - Supported programs and their input templates
//!
//! Nothing in this module touches process state: the periodic table is built once and
//! never mutated afterwards, and geometries and templates are plain values.

pub mod elements;
pub mod io;
pub mod models;
pub mod templates;

//! # qcauto Core Library
//!
//! Reference chemistry data and job plumbing for driving external quantum-chemistry
//! programs such as Tonto and Gaussian.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that static data, stateful job handling
//! and end-to-end orchestration stay independent of one another.
//!
//! - **[`core`]: The Foundation.** Immutable data: the periodic table (`PeriodicTable`,
//!   `Element`, `Symbol`), molecular geometries, geometry file I/O, and the input
//!   templates understood by each supported program.
//!
//! - **[`engine`]: The Job Layer.** The `ChemistryJob` descriptor with its
//!   prepare/arguments/finalize lifecycle, job configuration, the `Runner` seam through
//!   which external programs are executed, energy extraction and error types.
//!
//! - **[`workflows`]: The Public API.** Ties the `engine` and `core` together to run a
//!   complete job: render the input, hand it to a runner and collect the energy.

pub mod core;
pub mod engine;
pub mod workflows;

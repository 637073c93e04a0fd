//! # Engine Module
//!
//! The job layer: everything needed to describe one external quantum-chemistry
//! calculation, hand it to a runner, and read its result back.
//!
//! ## Overview
//!
//! A [`job::ChemistryJob`] moves through a fixed lifecycle:
//!
//! 1. **Created** - geometry, method, basis set and template are known.
//! 2. **Prepared** - [`job::ChemistryJob::prepare`] derives the input and output paths
//!    from `name + method + basis_set` and writes the rendered input file.
//! 3. **Executed** - a [`runner::Runner`] consumes the job's arguments, runs the
//!    program and reports whether it succeeded.
//! 4. **Finalized** - [`job::ChemistryJob::finalize`] extracts the energy from the
//!    output file, or silently does nothing if the run failed.
//!
//! The job never spawns a process itself; execution is always delegated to a runner.
//!
//! ## Architecture
//!
//! - **Job Descriptor** ([`job`]) - `ChemistryJob`, its builder and lifecycle state
//! - **Configuration** ([`config`]) - TOML-loadable job settings and parsing modes
//! - **Execution** ([`runner`]) - The runner seam, the null runner and a process runner
//! - **Result Extraction** ([`energy`]) - Locating and parsing the energy line
//! - **Progress Monitoring** ([`progress`]) - Lifecycle events for callers
//! - **Error Handling** ([`error`]) - Job-level error types

pub mod config;
pub mod energy;
pub mod error;
pub mod job;
pub mod progress;
pub mod runner;

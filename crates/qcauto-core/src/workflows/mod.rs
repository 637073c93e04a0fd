//! # Workflows Module
//!
//! High-level entry points that drive a [`ChemistryJob`](crate::engine::job::ChemistryJob)
//! through its whole lifecycle.
//!
//! - **Single-Point Workflow** ([`single_point`]) - Render the input, hand it to the job's
//!   runner, record the outcome and extract the energy, reporting each step.

pub mod single_point;

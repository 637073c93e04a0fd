//! # Templates Module
//!
//! Input-file templates for the external quantum-chemistry programs a job can drive.
//!
//! ## Overview
//!
//! A [`Template`] couples template text with the [`Program`] that consumes the
//! rendered input. The program fixes the file-extension policy of a job (for Tonto,
//! `.stdin` for input and `.stdout` for output) and the marker line used to locate
//! the energy in the program's output.
//!
//! Template text uses `${key}` placeholders which are filled from a [`RenderContext`].
//! Any value implementing [`ContextSource`] can contribute keys to that context; jobs
//! contribute `job.*` keys and geometries contribute `geometry.*` keys.
//!
//! ## Built-in templates
//!
//! | id              | program  | purpose                                   |
//! |-----------------|----------|-------------------------------------------|
//! | `tonto_roby`    | Tonto    | Roby bond indices from a formatted checkpoint |
//! | `tonto_dft`     | Tonto    | DFT single-point energy                   |
//! | `gaussian_spe`  | Gaussian | Single-point energy                       |
//! | `gaussian_wave` | Gaussian | Single point writing a formatted checkpoint |
//! | `empty`         | Tonto    | Empty input, useful for tests             |

pub mod catalog;
pub mod program;
pub mod render;

pub use catalog::DEFAULT_TEMPLATE;
pub use program::Program;
pub use render::{ContextSource, RenderContext, Template, TemplateError};

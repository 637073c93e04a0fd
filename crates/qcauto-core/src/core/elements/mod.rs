//! # Elements Module
//!
//! A canonical, immutable catalog of the chemical elements from hydrogen to lawrencium.
//!
//! ## Overview
//!
//! Every element is reachable through three access paths that always agree:
//!
//! - **Atomic number** - `table.get(8)`
//! - **Name** - `table.get("oxygen")` (lowercase canonical spelling)
//! - **Symbol** - `table.get("O")` (case-sensitive), or statically via [`Symbol::O`]
//!
//! Each element also has a named shortcut on the table, so `table.oxygen()` and
//! `table[Symbol::O]` return the same record as `table.get("oxygen")`.
//!
//! The table is generated from a single literal data table, so the [`Symbol`]
//! enumeration and the element records can never disagree about ordering.
//!
//! ## Usage
//!
//! ```
//! use qcauto::core::elements::{PeriodicTable, Symbol};
//!
//! let table = PeriodicTable::global();
//! let hydrogen = table.get("hydrogen").unwrap();
//! assert_eq!(hydrogen, table.get("H").unwrap());
//! assert_eq!(hydrogen, &table[Symbol::H]);
//! assert_eq!(hydrogen, table.hydrogen());
//! assert_eq!(hydrogen.mass(), 1.00794);
//! ```

mod data;
pub mod element;
pub mod table;

pub use data::Symbol;
pub use element::{Color, Element};
pub use table::{ElementKey, LookupError, PeriodicTable};

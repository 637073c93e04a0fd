use super::data::Symbol;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An RGB display color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as an `(r, g, b)` tuple.
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// An immutable chemical element record.
///
/// Records are created once when the [`PeriodicTable`](super::PeriodicTable) is built
/// and are never mutated afterwards. Two elements compare equal if and only if their
/// atomic numbers match; every other field is informational.
#[derive(Debug, Clone, Copy)]
pub struct Element {
    atomic_number: u32,
    symbol: Symbol,
    name: &'static str,
    color: Color,
    covalent_radius: f64,
    van_der_waals_radius: f64,
    mass: f64,
}

impl Element {
    pub(super) const fn new(
        atomic_number: u32,
        symbol: Symbol,
        name: &'static str,
        color: Color,
        covalent_radius: f64,
        van_der_waals_radius: f64,
        mass: f64,
    ) -> Self {
        Self {
            atomic_number,
            symbol,
            name,
            color,
            covalent_radius,
            van_der_waals_radius,
            mass,
        }
    }

    /// The atomic number, which is also the element's 1-based rank in the table.
    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// The lowercase canonical name (e.g. `"sodium"`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The case-sensitive canonical symbol (e.g. `"Na"`).
    pub fn symbol(&self) -> &'static str {
        self.symbol.as_str()
    }

    pub fn symbol_id(&self) -> Symbol {
        self.symbol
    }

    /// The display color used by molecular viewers.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Covalent radius in Angstroms.
    pub fn covalent_radius(&self) -> f64 {
        self.covalent_radius
    }

    /// Van der Waals radius in Angstroms.
    pub fn van_der_waals_radius(&self) -> f64 {
        self.van_der_waals_radius
    }

    /// Standard atomic mass in atomic mass units.
    pub fn mass(&self) -> f64 {
        self.mass
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.atomic_number == other.atomic_number
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.atomic_number.hash(state);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

use super::element::Color;
use std::fmt;
use std::str::FromStr;

/// One row of the literal element table. The atomic number is implied by the row's
/// position, so it is not stored here.
#[derive(Debug, Clone, Copy)]
pub(super) struct ElementRecord {
    pub symbol: Symbol,
    pub name: &'static str,
    pub color: Color,
    pub covalent_radius: f64,
    pub van_der_waals_radius: f64,
    pub mass: f64,
}

macro_rules! element_table {
    ($($symbol:ident => ($name:ident, ($r:literal, $g:literal, $b:literal), $cov:literal, $vdw:literal, $mass:literal)),+ $(,)?) => {
        /// Chemical element symbols, declared in atomic-number order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Symbol {
            $($symbol),+
        }

        impl Symbol {
            /// Every symbol, in ascending atomic-number order.
            pub const ALL: &'static [Symbol] = &[$(Symbol::$symbol),+];

            /// The canonical, case-sensitive spelling of the symbol (e.g. `"Na"`).
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Symbol::$symbol => stringify!($symbol)),+
                }
            }

            fn parse(s: &str) -> Option<Self> {
                match s {
                    $(stringify!($symbol) => Some(Symbol::$symbol),)+
                    _ => None,
                }
            }
        }

        pub(super) static ELEMENT_DATA: &[ElementRecord] = &[
            $(ElementRecord {
                symbol: Symbol::$symbol,
                name: stringify!($name),
                color: Color { r: $r, g: $g, b: $b },
                covalent_radius: $cov,
                van_der_waals_radius: $vdw,
                mass: $mass,
            }),+
        ];

        /// Named shortcuts, one per element, equivalent to looking the element up by
        /// its lowercase name.
        impl super::PeriodicTable {
            $(
                #[doc = concat!("The `", stringify!($symbol), "` record, same as `get(\"", stringify!($name), "\")`.")]
                pub fn $name(&self) -> &super::Element {
                    &self[Symbol::$symbol]
                }
            )+
        }

        #[cfg(test)]
        pub(super) static NAME_SHORTCUTS: &[(&str, for<'a> fn(&'a super::PeriodicTable) -> &'a super::Element)] = &[
            $((stringify!($name), super::PeriodicTable::$name)),+
        ];
    };
}

element_table! {
    H => (hydrogen, (255, 250, 205), 0.23, 1.09, 1.00794),
    He => (helium, (185, 211, 238), 1.50, 1.40, 4.002602),
    Li => (lithium, (190, 190, 190), 1.28, 1.82, 6.941),
    Be => (beryllium, (190, 190, 190), 0.96, 2.00, 9.012182),
    B => (boron, (160, 60, 60), 0.83, 2.00, 10.811),
    C => (carbon, (84, 84, 84), 0.68, 1.70, 12.0107),
    N => (nitrogen, (30, 144, 255), 0.68, 1.55, 14.0067),
    O => (oxygen, (255, 0, 0), 0.68, 1.52, 15.9994),
    F => (fluorine, (255, 255, 0), 0.64, 1.47, 18.998403),
    Ne => (neon, (185, 211, 238), 1.50, 1.54, 20.1797),
    Na => (sodium, (190, 190, 190), 1.66, 2.27, 22.98977),
    Mg => (magnesium, (190, 190, 190), 1.41, 1.73, 24.305),
    Al => (aluminium, (190, 190, 190), 1.21, 2.00, 26.981538),
    Si => (silicon, (211, 211, 211), 1.20, 2.10, 28.0855),
    P => (phosphorus, (255, 140, 0), 1.05, 1.80, 30.973761),
    S => (sulfur, (255, 246, 143), 1.02, 1.80, 32.065),
    Cl => (chlorine, (0, 255, 0), 0.99, 1.75, 35.453),
    Ar => (argon, (185, 211, 238), 1.51, 1.88, 39.948),
    K => (potassium, (190, 190, 190), 2.03, 2.75, 39.0983),
    Ca => (calcium, (190, 190, 190), 1.76, 2.00, 40.078),
    Sc => (scandium, (190, 190, 190), 1.70, 2.00, 44.95591),
    Ti => (titanium, (190, 190, 190), 1.60, 2.00, 47.867),
    V => (vanadium, (190, 190, 190), 1.53, 2.00, 50.9415),
    Cr => (chromium, (190, 190, 190), 1.39, 2.00, 51.9961),
    Mn => (manganese, (190, 190, 190), 1.61, 2.00, 54.938049),
    Fe => (iron, (190, 190, 190), 1.52, 2.00, 55.845),
    Co => (cobalt, (190, 190, 190), 1.26, 2.00, 58.9332),
    Ni => (nickel, (190, 190, 190), 1.24, 1.63, 58.6934),
    Cu => (copper, (255, 130, 71), 1.32, 1.40, 63.546),
    Zn => (zinc, (190, 190, 190), 1.22, 1.39, 65.409),
    Ga => (gallium, (190, 190, 190), 1.22, 1.87, 69.723),
    Ge => (germanium, (190, 190, 190), 1.17, 2.00, 72.64),
    As => (arsenic, (190, 190, 190), 1.21, 1.85, 74.9216),
    Se => (selenium, (190, 190, 190), 1.22, 1.90, 78.96),
    Br => (bromine, (190, 130, 60), 1.21, 1.85, 79.904),
    Kr => (krypton, (185, 211, 238), 1.50, 2.02, 83.798),
    Rb => (rubidium, (190, 190, 190), 2.20, 2.00, 85.4678),
    Sr => (strontium, (190, 190, 190), 1.95, 2.00, 87.62),
    Y => (yttrium, (190, 190, 190), 1.90, 2.00, 88.90585),
    Zr => (zirconium, (190, 190, 190), 1.75, 2.00, 91.224),
    Nb => (niobium, (190, 190, 190), 1.64, 2.00, 92.90638),
    Mo => (molybdenum, (190, 190, 190), 1.54, 2.00, 95.94),
    Tc => (technetium, (190, 190, 190), 1.47, 2.00, 98.0),
    Ru => (ruthenium, (190, 190, 190), 1.46, 2.00, 101.07),
    Rh => (rhodium, (190, 190, 190), 1.45, 2.00, 102.9055),
    Pd => (palladium, (190, 190, 190), 1.39, 1.63, 106.42),
    Ag => (silver, (255, 255, 255), 1.45, 1.72, 107.8682),
    Cd => (cadmium, (190, 190, 190), 1.44, 1.58, 112.411),
    In => (indium, (190, 190, 190), 1.42, 1.93, 114.818),
    Sn => (tin, (190, 190, 190), 1.39, 2.17, 118.71),
    Sb => (antimony, (190, 190, 190), 1.39, 2.00, 121.76),
    Te => (tellurium, (190, 190, 190), 1.47, 2.06, 127.6),
    I => (iodine, (160, 32, 240), 1.40, 1.98, 126.90447),
    Xe => (xenon, (185, 211, 238), 1.50, 2.16, 131.293),
    Cs => (caesium, (190, 190, 190), 2.44, 2.00, 132.90545),
    Ba => (barium, (190, 190, 190), 2.15, 2.00, 137.327),
    La => (lanthanum, (190, 190, 190), 2.07, 2.00, 138.9055),
    Ce => (cerium, (190, 190, 190), 2.04, 2.00, 140.116),
    Pr => (praseodymium, (190, 190, 190), 2.03, 2.00, 140.90765),
    Nd => (neodymium, (190, 190, 190), 2.01, 2.00, 144.24),
    Pm => (promethium, (190, 190, 190), 1.99, 2.00, 145.0),
    Sm => (samarium, (190, 190, 190), 1.98, 2.00, 150.36),
    Eu => (europium, (190, 190, 190), 1.98, 2.00, 151.964),
    Gd => (gadolinium, (190, 190, 190), 1.96, 2.00, 157.25),
    Tb => (terbium, (190, 190, 190), 1.94, 2.00, 158.92534),
    Dy => (dysprosium, (190, 190, 190), 1.92, 2.00, 162.5),
    Ho => (holmium, (190, 190, 190), 1.92, 2.00, 164.93032),
    Er => (erbium, (190, 190, 190), 1.89, 2.00, 167.259),
    Tm => (thulium, (190, 190, 190), 1.90, 2.00, 168.93421),
    Yb => (ytterbium, (190, 190, 190), 1.87, 2.00, 173.04),
    Lu => (lutetium, (190, 190, 190), 1.87, 2.00, 174.967),
    Hf => (hafnium, (190, 190, 190), 1.75, 2.00, 178.49),
    Ta => (tantalum, (190, 190, 190), 1.70, 2.00, 180.9479),
    W => (tungsten, (190, 190, 190), 1.62, 2.00, 183.84),
    Re => (rhenium, (190, 190, 190), 1.51, 2.00, 186.207),
    Os => (osmium, (190, 190, 190), 1.44, 2.00, 190.23),
    Ir => (iridium, (190, 190, 190), 1.41, 2.00, 192.217),
    Pt => (platinum, (190, 190, 190), 1.36, 1.72, 195.078),
    Au => (gold, (255, 215, 0), 1.50, 1.66, 196.96655),
    Hg => (mercury, (190, 190, 190), 1.32, 1.55, 200.59),
    Tl => (thallium, (190, 190, 190), 1.45, 1.96, 204.3833),
    Pb => (lead, (190, 190, 190), 1.46, 2.02, 207.2),
    Bi => (bismuth, (190, 190, 190), 1.48, 2.00, 208.98038),
    Po => (polonium, (190, 190, 190), 1.40, 2.00, 209.0),
    At => (astatine, (190, 190, 190), 1.21, 2.00, 210.0),
    Rn => (radon, (185, 211, 238), 1.50, 2.00, 222.0),
    Fr => (francium, (190, 190, 190), 2.60, 2.00, 223.0),
    Ra => (radium, (190, 190, 190), 2.21, 2.00, 226.0),
    Ac => (actinium, (190, 190, 190), 2.15, 2.00, 227.0),
    Th => (thorium, (190, 190, 190), 2.06, 2.00, 232.0381),
    Pa => (protactinium, (190, 190, 190), 2.00, 2.00, 231.03588),
    U => (uranium, (190, 190, 190), 1.96, 1.86, 238.02891),
    Np => (neptunium, (190, 190, 190), 1.90, 2.00, 237.0),
    Pu => (plutonium, (190, 190, 190), 1.87, 2.00, 244.0),
    Am => (americium, (190, 190, 190), 1.80, 2.00, 243.0),
    Cm => (curium, (190, 190, 190), 1.69, 2.00, 247.0),
    Bk => (berkelium, (190, 190, 190), 1.54, 2.00, 247.0),
    Cf => (californium, (190, 190, 190), 1.83, 2.00, 251.0),
    Es => (einsteinium, (190, 190, 190), 1.50, 2.00, 252.0),
    Fm => (fermium, (190, 190, 190), 1.50, 2.00, 257.0),
    Md => (mendelevium, (190, 190, 190), 1.50, 2.00, 258.0),
    No => (nobelium, (190, 190, 190), 1.50, 2.00, 259.0),
    Lr => (lawrencium, (190, 190, 190), 1.50, 2.00, 262.0),
}

impl Symbol {
    pub const fn atomic_number(self) -> u32 {
        self as u32 + 1
    }

    /// Resolves the symbol against the process-wide periodic table.
    pub fn element(self) -> &'static super::Element {
        &super::PeriodicTable::global()[self]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = super::LookupError;

    /// Parses a canonical element symbol. Matching is case-sensitive, so `"Co"` is
    /// cobalt while `"CO"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::parse(s).ok_or_else(|| super::LookupError::NotFound { key: s.to_string() })
    }
}

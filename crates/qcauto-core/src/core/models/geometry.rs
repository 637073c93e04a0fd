use crate::core::elements::Element;
use crate::core::templates::{ContextSource, RenderContext};
use nalgebra::Point3;
use std::collections::BTreeMap;

/// A single atom of a [`Geometry`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryAtom {
    /// The element, borrowed from the periodic table.
    pub element: &'static Element,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
}

/// A molecular geometry: an ordered list of atoms together with the electronic state
/// (total charge and spin multiplicity) the calculation should target.
///
/// The geometry is what a job template renders into the program's input file; the
/// job itself never inspects it beyond that.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Free-form title, typically the comment line of an XYZ file.
    pub title: String,
    /// Total molecular charge in elementary charge units.
    pub charge: i32,
    /// Spin multiplicity (2S + 1).
    pub multiplicity: u32,
    atoms: Vec<GeometryAtom>,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            title: String::new(),
            charge: 0,
            multiplicity: 1,
            atoms: Vec::new(),
        }
    }
}

impl Geometry {
    /// Creates an empty, neutral singlet geometry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_charge(mut self, charge: i32) -> Self {
        self.charge = charge;
        self
    }

    pub fn with_multiplicity(mut self, multiplicity: u32) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    /// Appends an atom at the given position (in Angstroms).
    pub fn add_atom(&mut self, element: &'static Element, position: Point3<f64>) {
        self.atoms.push(GeometryAtom { element, position });
    }

    pub fn atoms(&self) -> &[GeometryAtom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Sum of the atomic masses in atomic mass units.
    pub fn total_mass(&self) -> f64 {
        self.atoms.iter().map(|atom| atom.element.mass()).sum()
    }

    /// The molecular formula in Hill order: carbon first, hydrogen second, then the
    /// remaining symbols alphabetically. Without carbon every symbol is alphabetical.
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.element.symbol()).or_default() += 1;
        }

        let mut ordered: Vec<(&str, usize)> = Vec::with_capacity(counts.len());
        if let Some(carbon) = counts.remove("C") {
            ordered.push(("C", carbon));
            if let Some(hydrogen) = counts.remove("H") {
                ordered.push(("H", hydrogen));
            }
        }
        ordered.extend(counts);

        ordered
            .into_iter()
            .map(|(symbol, count)| match count {
                1 => symbol.to_string(),
                n => format!("{symbol}{n}"),
            })
            .collect()
    }

    /// One line per atom: symbol followed by x, y and z with eight decimals.
    pub fn coordinate_block(&self) -> String {
        self.atoms
            .iter()
            .map(|atom| {
                format!(
                    "{:<3}{:>16.8}{:>16.8}{:>16.8}",
                    atom.element.symbol(),
                    atom.position.x,
                    atom.position.y,
                    atom.position.z
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ContextSource for Geometry {
    fn populate(&self, context: &mut RenderContext) {
        context.insert("geometry.title", &self.title);
        context.insert("geometry.charge", self.charge);
        context.insert("geometry.multiplicity", self.multiplicity);
        context.insert("geometry.atom_count", self.atoms.len());
        context.insert("geometry.formula", self.formula());
        context.insert("geometry.atoms", self.coordinate_block());
    }
}

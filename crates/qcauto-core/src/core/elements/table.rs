use super::data::{ELEMENT_DATA, Symbol};
use super::element::Element;
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::sync::LazyLock;
use thiserror::Error;

static PERIODIC_TABLE: LazyLock<PeriodicTable> = LazyLock::new(PeriodicTable::build);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No such element '{key}'")]
    NotFound { key: String },
}

/// A key accepted by [`PeriodicTable::get`].
///
/// Integers resolve by atomic number, strings by canonical name or symbol, and
/// [`Symbol`] values resolve directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKey<'a> {
    AtomicNumber(i64),
    Label(&'a str),
    Symbol(Symbol),
}

impl fmt::Display for ElementKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKey::AtomicNumber(n) => write!(f, "{n}"),
            ElementKey::Label(label) => f.write_str(label),
            ElementKey::Symbol(symbol) => f.write_str(symbol.as_str()),
        }
    }
}

impl From<i32> for ElementKey<'_> {
    fn from(n: i32) -> Self {
        ElementKey::AtomicNumber(n.into())
    }
}

impl From<u32> for ElementKey<'_> {
    fn from(n: u32) -> Self {
        ElementKey::AtomicNumber(n.into())
    }
}

impl From<usize> for ElementKey<'_> {
    fn from(n: usize) -> Self {
        ElementKey::AtomicNumber(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl<'a> From<&'a str> for ElementKey<'a> {
    fn from(label: &'a str) -> Self {
        ElementKey::Label(label)
    }
}

impl<'a> From<&'a String> for ElementKey<'a> {
    fn from(label: &'a String) -> Self {
        ElementKey::Label(label.as_str())
    }
}

impl From<Symbol> for ElementKey<'_> {
    fn from(symbol: Symbol) -> Self {
        ElementKey::Symbol(symbol)
    }
}

/// The periodic table of elements.
///
/// Elements are stored in atomic-number order, and a single immutable map resolves
/// both names and symbols to their position. Most callers should use the shared
/// instance returned by [`PeriodicTable::global`]; [`PeriodicTable::build`] is
/// available for consumers that prefer to own a table.
#[derive(Debug, Clone)]
pub struct PeriodicTable {
    elements: Vec<Element>,
    by_label: HashMap<&'static str, usize>,
}

impl PeriodicTable {
    /// Builds the table from the literal element data. The atomic number of each
    /// element is its 1-based position in the data.
    pub fn build() -> Self {
        let elements: Vec<Element> = ELEMENT_DATA
            .iter()
            .zip(1u32..)
            .map(|(record, atomic_number)| {
                Element::new(
                    atomic_number,
                    record.symbol,
                    record.name,
                    record.color,
                    record.covalent_radius,
                    record.van_der_waals_radius,
                    record.mass,
                )
            })
            .collect();

        let mut by_label = HashMap::with_capacity(elements.len() * 2);
        for (index, element) in elements.iter().enumerate() {
            // First record wins if a label were ever duplicated.
            by_label.entry(element.name()).or_insert(index);
            by_label.entry(element.symbol()).or_insert(index);
        }

        Self { elements, by_label }
    }

    /// The process-wide table, built on first use.
    pub fn global() -> &'static PeriodicTable {
        &PERIODIC_TABLE
    }

    /// Looks up an element by atomic number, name or symbol.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if the atomic number is out of range or the
    /// string matches no canonical name or symbol.
    pub fn get<'k>(&self, key: impl Into<ElementKey<'k>>) -> Result<&Element, LookupError> {
        let key = key.into();
        let found = match key {
            ElementKey::AtomicNumber(n) => usize::try_from(n)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| self.elements.get(index)),
            ElementKey::Label(label) => self
                .by_label
                .get(label)
                .and_then(|&index| self.elements.get(index)),
            ElementKey::Symbol(symbol) => self.elements.get(symbol as usize),
        };
        found.ok_or_else(|| LookupError::NotFound {
            key: key.to_string(),
        })
    }

    /// Iterates over all elements in ascending atomic-number order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for PeriodicTable {
    fn default() -> Self {
        Self::build()
    }
}

impl Index<Symbol> for PeriodicTable {
    type Output = Element;

    fn index(&self, symbol: Symbol) -> &Element {
        &self.elements[symbol as usize]
    }
}

impl<'a> IntoIterator for &'a PeriodicTable {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_contains_all_103_elements_in_order() {
        let table = PeriodicTable::global();
        assert_eq!(table.len(), 103);
        let numbers: Vec<u32> = table.iter().map(|e| e.atomic_number()).collect();
        assert_eq!(numbers, (1..=103).collect::<Vec<_>>());
    }

    #[test]
    fn iteration_is_restartable_and_identical() {
        let table = PeriodicTable::global();
        let first: Vec<&Element> = table.iter().collect();
        let second: Vec<&Element> = table.into_iter().collect();
        assert_eq!(first, second);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name(), b.name());
        }
    }

    #[test]
    fn hydrogen_is_reachable_by_name_symbol_and_number() {
        let table = PeriodicTable::global();
        let by_name = table.get("hydrogen").unwrap();
        let by_symbol = table.get("H").unwrap();
        let by_number = table.get(1).unwrap();
        assert_eq!(by_name, by_symbol);
        assert_eq!(by_symbol, by_number);
        assert!(std::ptr::eq(by_name, by_symbol));
        assert_eq!(by_name.covalent_radius(), 0.23);
        assert_eq!(by_name.mass(), 1.00794);
    }

    #[test]
    fn every_element_agrees_across_all_access_paths() {
        let table = PeriodicTable::global();
        for element in table {
            let by_number = table.get(element.atomic_number()).unwrap();
            let by_name = table.get(element.name()).unwrap();
            let by_symbol = table.get(element.symbol()).unwrap();
            let by_enum = table.get(element.symbol_id()).unwrap();
            for found in [by_number, by_name, by_symbol, by_enum] {
                assert_eq!(found.atomic_number(), element.atomic_number());
                assert_eq!(found.name(), element.name());
                assert_eq!(found.symbol(), element.symbol());
            }
            assert_eq!(&table[element.symbol_id()], element);
        }
    }

    #[test]
    fn names_and_symbols_are_unique_and_disjoint() {
        let table = PeriodicTable::global();
        let mut labels = HashSet::new();
        for element in table {
            assert!(labels.insert(element.name()), "duplicate {}", element.name());
            assert!(labels.insert(element.symbol()), "duplicate {}", element.symbol());
        }
        assert_eq!(labels.len(), 206);
    }

    #[test]
    fn unknown_name_fails_with_not_found_carrying_key() {
        let err = PeriodicTable::global().get("unobtainium").unwrap_err();
        assert_eq!(
            err,
            LookupError::NotFound {
                key: "unobtainium".to_string()
            }
        );
        assert_eq!(err.to_string(), "No such element 'unobtainium'");
    }

    #[test]
    fn out_of_range_atomic_numbers_fail_with_not_found() {
        let table = PeriodicTable::global();
        assert!(matches!(table.get(999), Err(LookupError::NotFound { .. })));
        assert!(matches!(table.get(0), Err(LookupError::NotFound { .. })));
        assert!(matches!(table.get(-1), Err(LookupError::NotFound { .. })));
        assert!(matches!(table.get(104u32), Err(LookupError::NotFound { .. })));
        assert_eq!(table.get(103usize).unwrap().name(), "lawrencium");
    }

    #[test]
    fn label_lookup_is_case_sensitive() {
        let table = PeriodicTable::global();
        assert_eq!(table.get("Co").unwrap().name(), "cobalt");
        assert!(table.get("CO").is_err());
        assert!(table.get("Hydrogen").is_err());
        assert!(table.get("h").is_err());
    }

    #[test]
    fn string_keys_are_accepted_by_reference() {
        let key = String::from("sodium");
        assert_eq!(PeriodicTable::global().get(&key).unwrap().symbol(), "Na");
    }

    #[test]
    fn symbol_sugar_resolves_to_global_records() {
        let table = PeriodicTable::global();
        assert!(std::ptr::eq(Symbol::O.element(), table.get("oxygen").unwrap()));
        assert_eq!(table[Symbol::Fe].name(), "iron");
        assert_eq!(Symbol::Fe.element().atomic_number(), 26);
    }

    #[test]
    fn owned_table_matches_global_table() {
        let owned = PeriodicTable::build();
        let global = PeriodicTable::global();
        assert!(owned.iter().eq(global.iter()));
        assert!(!owned.is_empty());
    }

    #[test]
    fn selected_reference_values_are_preserved() {
        let table = PeriodicTable::global();
        let carbon = table.get("carbon").unwrap();
        assert_eq!(carbon.color().rgb(), (84, 84, 84));
        assert_eq!(carbon.van_der_waals_radius(), 1.70);
        assert_eq!(table.get("ytterbium").unwrap().symbol(), "Yb");
        assert_eq!(table.get("Au").unwrap().color().rgb(), (255, 215, 0));
    }
}

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// A signed decimal literal with an optional exponent. The explicit sign is required,
/// which keeps labels such as "2nd" or "(a.u.)" from matching.
static SIGNED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]\d+\.?\d*(?:[eE][-+]?\d+)?").expect("signed number pattern is valid")
});

#[derive(Debug, Error)]
pub enum EnergyParseError {
    #[error("No line containing '{marker}' was found")]
    MissingMarker { marker: String },
    #[error("Line {line} contains no signed numeric literal")]
    MissingNumber { line: usize },
    #[error("Line {line} contains an unparsable number '{value}'")]
    InvalidNumber { line: usize, value: String },
}

/// Returns the first signed number on the first line of `output` that contains
/// `marker`. Later marker lines are ignored.
///
/// # Errors
///
/// Returns [`EnergyParseError::MissingMarker`] if no line contains the marker, and
/// [`EnergyParseError::MissingNumber`] if that line holds no signed number.
pub fn extract_energy(output: &str, marker: &str) -> Result<f64, EnergyParseError> {
    let (index, line) = output
        .lines()
        .enumerate()
        .find(|(_, line)| line.contains(marker))
        .ok_or_else(|| EnergyParseError::MissingMarker {
            marker: marker.to_string(),
        })?;
    let line_num = index + 1;

    let literal = SIGNED_NUMBER
        .find(line)
        .ok_or(EnergyParseError::MissingNumber { line: line_num })?
        .as_str();
    literal
        .parse::<f64>()
        .map_err(|_| EnergyParseError::InvalidNumber {
            line: line_num,
            value: literal.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "Total energy";

    #[test]
    fn extracts_value_from_tonto_energy_line() {
        let output = "SCF converged\nTotal energy       =      -1.234567\n";
        assert_eq!(extract_energy(output, MARKER).unwrap(), -1.234567);
    }

    #[test]
    fn first_marker_line_wins() {
        let output = "Total energy = -76.010\nTotal energy = -76.020\n";
        assert_eq!(extract_energy(output, MARKER).unwrap(), -76.010);
    }

    #[test]
    fn first_signed_literal_on_the_line_wins() {
        let output = "Total energy (cycle 12) = -75.98 +0.001\n";
        assert_eq!(extract_energy(output, MARKER).unwrap(), -75.98);
    }

    #[test]
    fn explicit_plus_sign_and_exponents_are_accepted() {
        assert_eq!(extract_energy("Total energy = +3.5\n", MARKER).unwrap(), 3.5);
        assert_eq!(
            extract_energy("Total energy = -7.6e+01\n", MARKER).unwrap(),
            -76.0
        );
        assert_eq!(extract_energy("Total energy = -12\n", MARKER).unwrap(), -12.0);
    }

    #[test]
    fn gaussian_scf_done_line_is_parsed_with_its_marker() {
        let output = " SCF Done:  E(RHF) =  -75.5854023586     A.U. after    9 cycles\n";
        assert_eq!(extract_energy(output, "SCF Done").unwrap(), -75.5854023586);
    }

    #[test]
    fn missing_marker_is_reported() {
        let result = extract_energy("nothing to see\n", MARKER);
        assert!(matches!(
            result,
            Err(EnergyParseError::MissingMarker { marker }) if marker == MARKER
        ));
    }

    #[test]
    fn marker_without_signed_number_is_reported_with_line() {
        let output = "header\nTotal energy = 12.5\n";
        assert!(matches!(
            extract_energy(output, MARKER),
            Err(EnergyParseError::MissingNumber { line: 2 })
        ));
    }

    #[test]
    fn marker_is_case_sensitive() {
        assert!(extract_energy("total energy = -1.0\n", MARKER).is_err());
    }
}

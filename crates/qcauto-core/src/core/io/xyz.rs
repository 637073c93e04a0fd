use crate::core::elements::{LookupError, PeriodicTable};
use crate::core::io::traits::GeometryFile;
use crate::core::models::geometry::Geometry;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
    #[error("Unknown element on line {line}: {source}")]
    UnknownElement { line: usize, source: LookupError },
    #[error("Header declares {expected} atoms but {found} were found")]
    AtomCount { expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Missing atom count header")]
    MissingHeader,
    #[error("Invalid atom count '{0}'")]
    InvalidCount(String),
    #[error("Expected an element label followed by three coordinates")]
    TooFewFields,
    #[error("Invalid coordinate '{0}'")]
    InvalidCoordinate(String),
}

/// The plain XYZ format: an atom count, a title line, then one `label x y z` line
/// per atom with coordinates in Angstroms. Labels may be element symbols or names.
pub struct XyzFile;

impl GeometryFile for XyzFile {
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Geometry, Self::Error> {
        let table = PeriodicTable::global();
        let mut lines = reader.lines();

        let header = lines.next().transpose()?.ok_or(XyzError::Parse {
            line: 1,
            kind: XyzParseErrorKind::MissingHeader,
        })?;
        let expected: usize = header.trim().parse().map_err(|_| XyzError::Parse {
            line: 1,
            kind: XyzParseErrorKind::InvalidCount(header.trim().to_string()),
        })?;

        let title = lines.next().transpose()?.unwrap_or_default();
        let mut geometry = Geometry::new().with_title(title.trim());

        for (offset, line_res) in lines.enumerate() {
            let line = line_res?;
            let line_num = offset + 3;
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 4 {
                return Err(XyzError::Parse {
                    line: line_num,
                    kind: XyzParseErrorKind::TooFewFields,
                });
            }

            let element = table
                .get(fields[0])
                .map_err(|source| XyzError::UnknownElement {
                    line: line_num,
                    source,
                })?;

            let mut coords = [0.0f64; 3];
            for (slot, raw) in coords.iter_mut().zip(&fields[1..4]) {
                *slot = raw.parse().map_err(|_| XyzError::Parse {
                    line: line_num,
                    kind: XyzParseErrorKind::InvalidCoordinate(raw.to_string()),
                })?;
            }

            geometry.add_atom(element, Point3::from(coords));
        }

        if geometry.len() != expected {
            return Err(XyzError::AtomCount {
                expected,
                found: geometry.len(),
            });
        }

        Ok(geometry)
    }

    fn write_to(geometry: &Geometry, writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "{}", geometry.len())?;
        writeln!(writer, "{}", geometry.title)?;
        // Shortest round-trip formatting, so reading the file back is lossless.
        for atom in geometry.atoms() {
            let p = atom.position;
            writeln!(writer, "{} {} {} {}", atom.element.symbol(), p.x, p.y, p.z)?;
        }
        Ok(())
    }
}

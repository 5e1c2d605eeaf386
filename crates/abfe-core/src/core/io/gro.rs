use std::io::{self, BufRead, BufReader};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// One atom record from a GROMACS `.gro` structure file.
///
/// Only the identity columns are kept; coordinates and velocities are not
/// needed for index construction. `serial` is positional (one-based) because
/// the atom-number column wraps at 99999 in large membrane systems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroAtom {
    pub serial: usize,
    pub residue_number: usize,
    pub residue_name: String,
    pub atom_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroStructure {
    pub title: String,
    pub atoms: Vec<GroAtom>,
}

#[derive(Debug, Error)]
pub enum GroError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: GroParseErrorKind,
    },
    #[error("Truncated file: expected {expected} atom records, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("Unexpected end of file: missing {0}")]
    UnexpectedEof(&'static str),
}

#[derive(Debug, Error)]
pub enum GroParseErrorKind {
    #[error("Invalid atom count (value: '{value}')")]
    InvalidAtomCount { value: String },
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Line is too short for an atom record (must be at least 20 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

impl GroStructure {
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, GroError> {
        let mut lines = reader.lines();

        let title = match lines.next() {
            Some(line) => line?.trim().to_string(),
            None => return Err(GroError::UnexpectedEof("title line")),
        };

        let count_line = match lines.next() {
            Some(line) => line?,
            None => return Err(GroError::UnexpectedEof("atom count line")),
        };
        let expected: usize = count_line.trim().parse().map_err(|_| GroError::Parse {
            line: 2,
            kind: GroParseErrorKind::InvalidAtomCount {
                value: count_line.trim().to_string(),
            },
        })?;

        let mut atoms = Vec::with_capacity(expected);
        for (i, line_res) in lines.take(expected).enumerate() {
            let line = line_res?;
            let line_num = i + 3;

            if line.len() < 20 {
                return Err(GroError::Parse {
                    line: line_num,
                    kind: GroParseErrorKind::LineTooShort,
                });
            }

            let res_num_str = slice_and_trim(&line, 0, 5);
            let residue_number: usize = res_num_str.parse().map_err(|_| GroError::Parse {
                line: line_num,
                kind: GroParseErrorKind::InvalidInt {
                    columns: "1-5".into(),
                    value: res_num_str.into(),
                },
            })?;

            atoms.push(GroAtom {
                serial: i + 1,
                residue_number,
                residue_name: slice_and_trim(&line, 5, 10).to_string(),
                atom_name: slice_and_trim(&line, 10, 15).to_string(),
            });
        }

        if atoms.len() != expected {
            return Err(GroError::Truncated {
                expected,
                found: atoms.len(),
            });
        }

        Ok(Self { title, atoms })
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, GroError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

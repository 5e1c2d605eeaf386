use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Maximum indices per line in a written `.ndx` file.
const INDICES_PER_LINE: usize = 15;

/// A named group of one-based atom indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGroup {
    pub name: String,
    pub atoms: Vec<usize>,
}

impl IndexGroup {
    pub fn new(name: impl Into<String>, atoms: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            atoms,
        }
    }
}

/// A GROMACS index file: an ordered list of atom groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexFile {
    pub groups: Vec<IndexGroup>,
}

impl IndexFile {
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for group in &self.groups {
            writeln!(writer, "[ {} ]", group.name)?;
            for chunk in group.atoms.chunks(INDICES_PER_LINE) {
                let line: Vec<String> = chunk.iter().map(|i| format!("{:>4}", i)).collect();
                writeln!(writer, "{}", line.join(" "))?;
            }
        }
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_written_with_headers_and_wrapped_lines() {
        let index = IndexFile {
            groups: vec![
                IndexGroup::new("System", (1..=20).collect()),
                IndexGroup::new("Water_and_ions", vec![18, 19, 20]),
            ],
        };

        let mut buffer = Vec::new();
        index.write_to(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("[ System ]\n"));
        assert!(text.contains("[ Water_and_ions ]\n"));

        // 20 indices wrap onto two lines for the first group.
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 2 + 1);
        assert_eq!(lines[1].split_whitespace().count(), 15);
        assert_eq!(lines[2].split_whitespace().count(), 5);
        assert_eq!(lines[4].split_whitespace().count(), 3);
    }

    #[test]
    fn empty_group_still_writes_its_header() {
        let index = IndexFile {
            groups: vec![IndexGroup::new("Ions", vec![])],
        };
        let mut buffer = Vec::new();
        index.write_to(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[ Ions ]\n");
    }
}

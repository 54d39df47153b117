//! Plain-text case table format.
//!
//! ```text
//! # comment
//! g <config> <dx dy dz corner> <dx dy dz corner> ...
//! n <config> <nx ny nz> ...
//! ```
//!
//! `config` is decimal or `0x`-prefixed hex. A `g` line carries three
//! vertices per triangle, four numbers per vertex; the matching `n` line
//! carries one normal per triangle. Lines may appear in any order, but every
//! `n` line needs a `g` line for the same configuration.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use iso_core::Point3;

use super::{CaseEntry, CaseTable, TableVertex};
use crate::error::{IsoIoError, Result};

/// Parse a case table from a reader.
pub fn load<R: Read>(reader: R) -> Result<CaseTable> {
    let buf_reader = BufReader::new(reader);
    let mut geometry: HashMap<u32, (usize, Vec<TableVertex>)> = HashMap::new();
    let mut normals: HashMap<u32, (usize, Vec<Point3>)> = HashMap::new();

    for (idx, line) in buf_reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let Some(kind) = parts.next() else {
            continue;
        };
        if kind != "g" && kind != "n" {
            return Err(IsoIoError::table(
                line_no,
                format!("unknown record type '{}'", kind),
            ));
        }
        let config = match parts.next() {
            Some(token) => parse_config(token, line_no)?,
            None => return Err(IsoIoError::table(line_no, "missing configuration")),
        };
        let values = parse_floats(parts, line_no)?;

        if kind == "g" {
            if values.len() % 12 != 0 {
                return Err(IsoIoError::table(
                    line_no,
                    format!(
                        "geometry has {} components, expected a multiple of 12",
                        values.len()
                    ),
                ));
            }
            let mut vertices = Vec::with_capacity(values.len() / 4);
            for c in values.chunks_exact(4) {
                let corner = parse_corner(c[3], line_no)?;
                vertices.push(TableVertex::new(Point3::new(c[0], c[1], c[2]), corner));
            }
            if geometry.insert(config, (line_no, vertices)).is_some() {
                return Err(IsoIoError::table(
                    line_no,
                    format!("duplicate geometry for configuration {:#010x}", config),
                ));
            }
        } else {
            if values.len() % 3 != 0 {
                return Err(IsoIoError::table(
                    line_no,
                    format!(
                        "normals have {} components, expected a multiple of 3",
                        values.len()
                    ),
                ));
            }
            let list = values
                .chunks_exact(3)
                .map(|c| Point3::new(c[0], c[1], c[2]))
                .collect();
            if normals.insert(config, (line_no, list)).is_some() {
                return Err(IsoIoError::table(
                    line_no,
                    format!("duplicate normals for configuration {:#010x}", config),
                ));
            }
        }
    }

    if let Some((line_no, config)) = normals
        .iter()
        .filter(|(config, _)| !geometry.contains_key(*config))
        .map(|(config, (line_no, _))| (*line_no, *config))
        .min()
    {
        return Err(IsoIoError::table(
            line_no,
            format!("normals for configuration {:#010x} have no geometry", config),
        ));
    }

    let mut ordered: Vec<(u32, usize, Vec<TableVertex>)> = geometry
        .into_iter()
        .map(|(config, (line_no, vertices))| (config, line_no, vertices))
        .collect();
    ordered.sort_unstable_by_key(|&(_, line_no, _)| line_no);

    let mut builder = CaseTable::builder();
    for (config, line_no, vertices) in ordered {
        let normal_list = normals.remove(&config).map(|(_, n)| n).unwrap_or_default();
        let entry = CaseEntry::new(vertices, normal_list);
        entry.validate(line_no)?;
        builder.insert(config, entry)?;
    }

    let table = builder.build();
    log::info!("Loaded case table with {} configurations", table.len());
    Ok(table)
}

/// Parse a case table from a file.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CaseTable> {
    let file = File::open(path)?;
    load(file)
}

/// Write a case table, configurations in ascending order.
pub fn save<W: Write>(table: &CaseTable, writer: &mut W) -> Result<()> {
    writeln!(writer, "# Skeleton climbing case table")?;
    writeln!(writer, "# {} configurations", table.len())?;

    for config in table.configs() {
        let Some(entry) = table.get(config) else {
            continue;
        };

        write!(writer, "g {:#010x}", config)?;
        for v in &entry.vertices {
            write!(
                writer,
                " {} {} {} {}",
                v.offset.x, v.offset.y, v.offset.z, v.corner
            )?;
        }
        writeln!(writer)?;

        if !entry.normals.is_empty() {
            write!(writer, "n {:#010x}", config)?;
            for n in &entry.normals {
                write!(writer, " {} {} {}", n.x, n.y, n.z)?;
            }
            writeln!(writer)?;
        }
    }

    Ok(())
}

/// Write a case table to a file.
pub fn save_to_file<P: AsRef<Path>>(table: &CaseTable, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    save(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn parse_config(token: &str, line: usize) -> Result<u32> {
    let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => token.parse(),
    };
    parsed.map_err(|_| IsoIoError::table(line, format!("invalid configuration '{}'", token)))
}

fn parse_floats<'a, I>(parts: I, line: usize) -> Result<Vec<f32>>
where
    I: Iterator<Item = &'a str>,
{
    parts
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|_| IsoIoError::table(line, format!("invalid number '{}'", token)))
        })
        .collect()
}

fn parse_corner(value: f32, line: usize) -> Result<u8> {
    if value.fract() != 0.0 || !(0.0..8.0).contains(&value) {
        return Err(IsoIoError::table(
            line,
            format!("corner index {} is not an integer in 0..8", value),
        ));
    }
    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_TRIANGLE: &str = "\
# single corner
g 0x00900901 0.5 0 0 0  0 0.5 0 0  0 0 -0.5 0
n 0x00900901 -0.57735 -0.57735 0.57735
";

    #[test]
    fn test_load_single_entry() {
        let table = load(ONE_TRIANGLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);

        let entry = table.get(0x0090_0901).unwrap();
        assert_eq!(entry.triangle_count(), 1);
        assert_eq!(entry.vertices[2].offset, Point3::new(0.0, 0.0, -0.5));
        assert_eq!(entry.normals.len(), 1);
    }

    #[test]
    fn test_decimal_config() {
        let text = "g 9439489 0.5 0 0 0 0 0.5 0 0 0 0 -0.5 0\nn 9439489 0 0 1\n";
        let table = load(text.as_bytes()).unwrap();
        assert!(table.get(0x0090_0901).is_some());
    }

    #[test]
    fn test_rejects_partial_triangle() {
        let text = "# header\ng 1 0.5 0 0 0 0 0.5 0 0\n";
        let err = load(text.as_bytes()).unwrap_err();
        assert!(matches!(err, IsoIoError::TableFormat { line: 2, .. }));
    }

    #[test]
    fn test_rejects_bad_corner() {
        let text = "g 1 0.5 0 0 9 0 0.5 0 0 0 0 -0.5 0\nn 1 0 0 1\n";
        let err = load(text.as_bytes()).unwrap_err();
        assert!(matches!(err, IsoIoError::TableFormat { line: 1, .. }));

        let text = "g 1 0.5 0 0 1.5 0 0.5 0 0 0 0 -0.5 0\nn 1 0 0 1\n";
        assert!(load(text.as_bytes()).is_err());
    }

    #[test]
    fn test_rejects_normal_count_mismatch() {
        let text = "g 1 0.5 0 0 0 0 0.5 0 0 0 0 -0.5 0\nn 1 0 0 1 0 1 0\n";
        let err = load(text.as_bytes()).unwrap_err();
        assert!(matches!(err, IsoIoError::TableFormat { line: 1, .. }));
        assert!(err.to_string().contains("2 normals for 1 triangles"));
    }

    #[test]
    fn test_rejects_orphan_normals() {
        let text = "g 1 0.5 0 0 0 0 0.5 0 0 0 0 -0.5 0\nn 1 0 0 1\nn 2 0 0 1\n";
        let err = load(text.as_bytes()).unwrap_err();
        assert!(matches!(err, IsoIoError::TableFormat { line: 3, .. }));
    }

    #[test]
    fn test_rejects_duplicates_and_unknown_records() {
        let text = "g 1\ng 1\n";
        let err = load(text.as_bytes()).unwrap_err();
        assert!(matches!(err, IsoIoError::TableFormat { line: 2, .. }));

        let text = "q 1 0 0 0\n";
        assert!(load(text.as_bytes()).is_err());

        let text = "g zz\n";
        assert!(load(text.as_bytes()).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let table = load(ONE_TRIANGLE.as_bytes()).unwrap();
        let mut buffer = Vec::new();
        save(&table, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("g 0x00900901"));
        let reloaded = load(text.as_bytes()).unwrap();
        assert_eq!(table, reloaded);
    }
}

//! Case tables: configuration-keyed triangle geometry and normals.
//!
//! A [`CaseTable`] maps a 32-bit cube configuration to the triangles emitted
//! for it, as cube-local vertex offsets plus the corner whose sample colors
//! each vertex, and one normal per triangle. A configuration with no entry
//! means no surface passes through the cell.
//!
//! Tables are immutable once built and are handed to the generator by
//! reference, so several generators can share one table and tests can use
//! small synthetic tables.
//!
//! # Example
//!
//! ```ignore
//! use iso_io::tables::{self, CaseTable};
//!
//! let table = tables::reference::tetrahedral();
//! tables::save_to_file(&table, "skeleton.tbl")?;
//! let loaded = tables::load_from_file("skeleton.tbl")?;
//! assert_eq!(table, loaded);
//! ```

mod format;
pub mod reference;

use std::collections::HashMap;

use iso_core::Point3;

use crate::error::{IsoIoError, Result};

pub use format::{load, load_from_file, save, save_to_file};

/// One emitted vertex in cube-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableVertex {
    /// Offset from the cell's lower/left/back corner. The z component is
    /// stored in the generator's mirrored convention.
    pub offset: Point3,
    /// Corner (0-7) whose sample is passed to the colorer for this vertex.
    pub corner: u8,
}

impl TableVertex {
    /// Create a new table vertex.
    #[inline]
    pub const fn new(offset: Point3, corner: u8) -> Self {
        Self { offset, corner }
    }
}

/// Geometry for one configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseEntry {
    /// Triangle vertices, three per triangle.
    pub vertices: Vec<TableVertex>,
    /// One normal per triangle.
    pub normals: Vec<Point3>,
}

impl CaseEntry {
    /// Create a new entry. Invariants are checked when it is inserted into a table.
    pub fn new(vertices: Vec<TableVertex>, normals: Vec<Point3>) -> Self {
        Self { vertices, normals }
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Whether the entry emits nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check entry invariants, attributing failures to `line`.
    pub(crate) fn validate(&self, line: usize) -> Result<()> {
        if self.vertices.len() % 3 != 0 {
            return Err(IsoIoError::table(
                line,
                format!(
                    "{} vertices do not form whole triangles",
                    self.vertices.len()
                ),
            ));
        }
        if self.normals.len() != self.triangle_count() {
            return Err(IsoIoError::table(
                line,
                format!(
                    "{} normals for {} triangles",
                    self.normals.len(),
                    self.triangle_count()
                ),
            ));
        }
        if let Some(v) = self.vertices.iter().find(|v| v.corner >= 8) {
            return Err(IsoIoError::table(
                line,
                format!("corner index {} is outside 0..8", v.corner),
            ));
        }
        Ok(())
    }
}

/// Immutable configuration-to-geometry lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseTable {
    entries: HashMap<u32, CaseEntry>,
}

impl CaseTable {
    /// Start building a table.
    pub fn builder() -> CaseTableBuilder {
        CaseTableBuilder::default()
    }

    /// Geometry for `config`, or `None` when no surface passes through.
    #[inline]
    pub fn get(&self, config: u32) -> Option<&CaseEntry> {
        self.entries.get(&config)
    }

    /// Number of configurations with an entry.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All configurations with an entry, in ascending order.
    pub fn configs(&self) -> Vec<u32> {
        let mut configs: Vec<u32> = self.entries.keys().copied().collect();
        configs.sort_unstable();
        configs
    }

    /// Largest triangle count of any entry.
    pub fn max_triangles(&self) -> usize {
        self.entries
            .values()
            .map(CaseEntry::triangle_count)
            .max()
            .unwrap_or(0)
    }
}

/// Builder validating entries as they are inserted.
#[derive(Debug, Default)]
pub struct CaseTableBuilder {
    entries: HashMap<u32, CaseEntry>,
}

impl CaseTableBuilder {
    /// Add an entry. Fails on a malformed entry or a repeated configuration.
    pub fn insert(&mut self, config: u32, entry: CaseEntry) -> Result<&mut Self> {
        entry.validate(0)?;
        if self.entries.contains_key(&config) {
            return Err(IsoIoError::DuplicateEntry { config });
        }
        self.entries.insert(config, entry);
        Ok(self)
    }

    /// Whether `config` has already been inserted.
    pub fn contains(&self, config: u32) -> bool {
        self.entries.contains_key(&config)
    }

    /// Finish the table.
    pub fn build(self) -> CaseTable {
        CaseTable {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> CaseEntry {
        CaseEntry::new(
            vec![
                TableVertex::new(Point3::new(0.5, 0.0, 0.0), 0),
                TableVertex::new(Point3::new(0.0, 0.5, 0.0), 0),
                TableVertex::new(Point3::new(0.0, 0.0, -0.5), 0),
            ],
            vec![Point3::new(-1.0, -1.0, 1.0).normalize()],
        )
    }

    #[test]
    fn test_builder_and_lookup() {
        let mut builder = CaseTable::builder();
        builder.insert(0x0010_0901, triangle()).unwrap();
        let table = builder.build();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0x0010_0901).map(CaseEntry::triangle_count), Some(1));
        assert!(table.get(0).is_none());
        assert_eq!(table.configs(), vec![0x0010_0901]);
        assert_eq!(table.max_triangles(), 1);
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let mut builder = CaseTable::builder();
        builder.insert(7, triangle()).unwrap();
        let err = builder.insert(7, triangle()).unwrap_err();
        assert!(matches!(err, IsoIoError::DuplicateEntry { config: 7 }));
    }

    #[test]
    fn test_builder_rejects_malformed_entries() {
        let mut entry = triangle();
        entry.vertices.pop();
        assert!(CaseTable::builder().insert(1, entry).is_err());

        let mut entry = triangle();
        entry.normals.clear();
        assert!(CaseTable::builder().insert(1, entry).is_err());

        let mut entry = triangle();
        entry.vertices[1].corner = 8;
        assert!(CaseTable::builder().insert(1, entry).is_err());
    }
}

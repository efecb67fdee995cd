use std::fmt::Debug;

use itertools::Itertools;
use ndarray::{Array1, Zip};

use crate::errors::{FeatureRasterError, Result};

/// One value per pixel, in raster row-major order.
pub type Column = Array1<f64>;

/// Pixels as rows, bands and derived indices as named columns.
///
/// All columns share one length. Columns keep insertion order, which is
/// the band order when the table is written back to a raster.
#[derive(Clone, Default, PartialEq)]
pub struct PixelTable {
    n_rows: usize,
    columns: Vec<(String, Column)>,
}

impl Debug for PixelTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelTable")
            .field("n_rows", &self.n_rows)
            .field("columns", &self.column_names().collect_vec())
            .finish()
    }
}

impl PixelTable {
    /// Empty table for `n_rows` pixels.
    pub fn new(n_rows: usize) -> Self {
        Self {
            n_rows,
            columns: Vec::new(),
        }
    }

    /// Table from named columns. The first column fixes the row count.
    pub fn from_columns<N: Into<String>>(
        columns: impl IntoIterator<Item = (N, Column)>,
    ) -> Result<Self> {
        let mut columns = columns.into_iter().peekable();
        let n_rows = columns.peek().map_or(0, |(_, column)| column.len());
        let mut table = Self::new(n_rows);
        for (name, column) in columns {
            table.insert(name, column)?;
        }
        Ok(table)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|(column, _)| column == name)
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.position(name)
            .map(|idx| &self.columns[idx].1)
            .ok_or_else(|| FeatureRasterError::MissingColumn(name.into()))
    }

    /// Several columns at once, in the order they are named.
    pub fn columns<const N: usize>(&self, names: [&str; N]) -> Result<[&Column; N]> {
        let columns: Vec<&Column> = names
            .iter()
            .map(|name| self.column(name))
            .collect::<Result<_>>()?;
        Ok(std::array::from_fn(|idx| columns[idx]))
    }

    /// Adds a column at the end, or replaces the column of the same name in place.
    pub fn insert<N: Into<String>>(&mut self, name: N, column: Column) -> Result<()> {
        let name = name.into();
        if column.len() != self.n_rows {
            return Err(FeatureRasterError::ColumnLength {
                column: name,
                expected: self.n_rows,
                found: column.len(),
            });
        }
        match self.position(&name) {
            Some(idx) => self.columns[idx].1 = column,
            None => self.columns.push((name, column)),
        }
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Column> {
        self.position(name)
            .map(|idx| self.columns.remove(idx).1)
            .ok_or_else(|| FeatureRasterError::MissingColumn(name.into()))
    }

    /// Renames every column positionally.
    ///
    /// Fails without touching the table when `names` does not have one entry
    /// per column, or names a column twice.
    pub fn rename<N: Into<String>>(&mut self, names: impl IntoIterator<Item = N>) -> Result<()> {
        let names = names.into_iter().map(Into::into).collect_vec();
        if names.len() != self.columns.len() {
            return Err(FeatureRasterError::ColumnCount {
                expected: self.columns.len(),
                found: names.len(),
            });
        }
        if let Some(duplicate) = names.iter().duplicates().next() {
            return Err(FeatureRasterError::DuplicateColumn(duplicate.clone()));
        }
        for ((name, _), new_name) in self.columns.iter_mut().zip(names) {
            *name = new_name;
        }
        Ok(())
    }

    /// `(name, column)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns
            .iter()
            .map(|(name, column)| (name.as_str(), column))
    }

    /// Rows where `keep` is true, in their original order.
    pub fn filter_rows(&self, keep: &Array1<bool>) -> Result<Self> {
        if keep.len() != self.n_rows {
            return Err(FeatureRasterError::ColumnLength {
                column: "row mask".into(),
                expected: self.n_rows,
                found: keep.len(),
            });
        }
        let n_rows = keep.iter().filter(|keep| **keep).count();
        let columns = self
            .columns
            .iter()
            .map(|(name, column)| {
                let filtered = Zip::from(column)
                    .and(keep)
                    .fold(Vec::with_capacity(n_rows), |mut rows, &value, &keep| {
                        if keep {
                            rows.push(value);
                        }
                        rows
                    });
                (name.clone(), Column::from(filtered))
            })
            .collect();
        Ok(Self { n_rows, columns })
    }
}

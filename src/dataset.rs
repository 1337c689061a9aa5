use ahash::RandomState;
use hashbrown::HashMap;
use num_traits::Float;

use alloc::{string::String, vec::Vec};

use crate::{NumericSample, Result, StatsError};

/// An immutable snapshot of a parsed table: raw string cells keyed by column name.
///
/// The table is handed over by whatever loaded and parsed the source file.
/// Cells stay raw until a column is requested as a [`NumericSample`], at which
/// point each column is coerced on its own, independently of the others.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Cells of each column in row order
    columns: HashMap<String, Vec<String>, RandomState>,
    /// Column names in first-seen order
    order: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from `(name, cells)` columns
    ///
    /// A repeated column name replaces the earlier cells but keeps its first position.
    ///
    /// # Examples
    ///
    /// ```
    /// use car_market_stats::Dataset;
    ///
    /// let dataset = Dataset::from_columns([
    ///     ("Price", vec!["72.8", "65"]),
    ///     ("Mileage", vec!["32000", "41000"]),
    /// ]);
    /// assert_eq!(dataset.column_names(), &["Price", "Mileage"]);
    /// assert_eq!(dataset.num_rows(), 2);
    /// ```
    pub fn from_columns<I, N, C, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        columns
            .into_iter()
            .fold(Self::default(), |dataset, (name, cells)| {
                dataset.with_column(name, cells)
            })
    }

    /// Builds a dataset from a header row and data rows, the shape a
    /// header-aware CSV parser produces
    ///
    /// Blank lines (no cells, or a single empty cell) are skipped. A row of
    /// empty separated cells such as `,,` is kept as empty cells. Short rows
    /// are padded with empty cells and cells beyond the header are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use car_market_stats::Dataset;
    ///
    /// let dataset = Dataset::from_rows(
    ///     ["Price", "Mileage"],
    ///     [vec!["72.8", "32000"], vec![""], vec!["65"]],
    /// );
    /// assert_eq!(dataset.num_rows(), 2);
    /// assert_eq!(dataset.column("Mileage").unwrap(), &["32000", ""]);
    /// ```
    pub fn from_rows<H, HS, R, C, S>(header: H, rows: R) -> Self
    where
        H: IntoIterator<Item = HS>,
        HS: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = header.into_iter().map(Into::into).collect();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); names.len()];

        let mut skipped = 0usize;
        for row in rows {
            let mut row: Vec<String> = row.into_iter().map(Into::into).collect();
            if row.len() <= 1 && row.iter().all(String::is_empty) {
                skipped += 1;
                continue;
            }
            row.resize(names.len(), String::new());
            for (column, cell) in cells.iter_mut().zip(row) {
                column.push(cell);
            }
        }
        tracing::debug!(
            columns = names.len(),
            skipped,
            "built dataset from rows"
        );

        Self::from_columns(names.into_iter().zip(cells))
    }

    /// Returns a copy of the dataset with `name` set to `cells`
    pub fn with_column<N, C, S>(mut self, name: N, cells: C) -> Self
    where
        N: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let cells = cells.into_iter().map(Into::into).collect();
        if self.columns.insert(name.clone(), cells).is_none() {
            self.order.push(name);
        }
        self
    }

    /// Returns the raw cells of a column
    ///
    /// # Errors
    ///
    /// * [`StatsError::MissingColumn`] if the dataset has no such column
    pub fn column(&self, name: &str) -> Result<&[String]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| StatsError::MissingColumn(name.into()))
    }

    /// Returns a column coerced into a [`NumericSample`]
    ///
    /// # Errors
    ///
    /// * [`StatsError::MissingColumn`] if the dataset has no such column
    pub fn numeric_column<T: Float>(&self, name: &str) -> Result<NumericSample<T>> {
        let cells = self.column(name)?;
        tracing::debug!(column = name, cells = cells.len(), "coercing column");
        Ok(NumericSample::parse(cells))
    }

    /// Returns `true` if the dataset has a column with this name
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Returns the column names in first-seen order
    pub fn column_names(&self) -> &[String] {
        &self.order
    }

    /// Returns the number of columns
    pub fn num_columns(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of rows, the length of the longest column
    pub fn num_rows(&self) -> usize {
        self.columns.values().map(Vec::len).max().unwrap_or(0)
    }
}

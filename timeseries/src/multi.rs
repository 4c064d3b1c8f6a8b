// Copyright 2020 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Error;
use log::debug;

/// A `TimeSeriesMulti` stores a row of values, one per column, for each time.
///
/// Values are stored column-major so that a whole column can be borrowed as a
/// slice. Every column always has one value per time.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeriesMulti<V = f64, T = f64> {
    times: Vec<T>,
    columns: Vec<Vec<V>>,
}

impl<V, T> TimeSeriesMulti<V, T> {
    /// Create an empty series with `columns` value columns.
    pub fn new(columns: usize) -> Self {
        Self {
            times: Vec::new(),
            columns: (0..columns).map(|_| Vec::new()).collect(),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Append a row. The row must have exactly one value per column.
    pub fn add_data(&mut self, time: T, row: &[V]) -> Result<(), Error>
    where
        V: Clone,
    {
        if row.len() != self.columns.len() {
            debug!(
                "rejecting row of {} values for {} columns",
                row.len(),
                self.columns.len()
            );
            return Err(Error::ColumnMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }

        self.times.push(time);
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(value.clone());
        }
        Ok(())
    }

    /// Append a new column. It must have one value per existing time.
    pub fn add_column(&mut self, values: &[V]) -> Result<(), Error>
    where
        V: Clone,
    {
        if values.len() != self.times.len() {
            debug!(
                "rejecting column of {} values for {} times",
                values.len(),
                self.times.len()
            );
            return Err(Error::LengthMismatch {
                times: self.times.len(),
                values: values.len(),
            });
        }

        self.columns.push(values.to_vec());
        Ok(())
    }

    pub fn time(&self, index: usize) -> Option<&T> {
        self.times.get(index)
    }

    pub fn data(&self, column: usize, index: usize) -> Option<&V> {
        self.columns.get(column)?.get(index)
    }

    /// Borrow every value of one column.
    pub fn column(&self, column: usize) -> Option<&[V]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    /// Iterate over the values of the row at `index`, in column order.
    pub fn row(&self, index: usize) -> Option<impl Iterator<Item = &V> + '_> {
        if index >= self.times.len() {
            return None;
        }
        Some(self.columns.iter().map(move |column| &column[index]))
    }

    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Returns the most recently appended value of `column`.
    pub fn last_data(&self, column: usize) -> Option<&V> {
        self.columns.get(column)?.last()
    }

    pub fn last_time(&self) -> Option<&T> {
        self.times.last()
    }

    /// Remove all rows. The number of columns is unchanged.
    pub fn clear(&mut self) {
        self.times.clear();
        for column in &mut self.columns {
            column.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows() {
        let mut series: TimeSeriesMulti = TimeSeriesMulti::new(2);
        assert!(series.is_empty());
        assert_eq!(series.columns(), 2);

        series.add_data(0.0, &[1.0, 10.0]).unwrap();
        series.add_data(1.0, &[2.0, 20.0]).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.time(1), Some(&1.0));
        assert_eq!(series.data(0, 1), Some(&2.0));
        assert_eq!(series.data(1, 0), Some(&10.0));
        assert_eq!(series.data(2, 0), None);
        assert_eq!(series.column(1), Some(&[10.0, 20.0][..]));
        assert_eq!(series.last_data(1), Some(&20.0));
        assert_eq!(series.last_time(), Some(&1.0));

        let row: Vec<f64> = series.row(1).unwrap().copied().collect();
        assert_eq!(row, vec![2.0, 20.0]);
        assert!(series.row(2).is_none());
    }

    #[test]
    fn mismatched_row() {
        let mut series: TimeSeriesMulti<u8> = TimeSeriesMulti::new(3);
        assert_eq!(
            series.add_data(0.0, &[1, 2]),
            Err(Error::ColumnMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(series.is_empty());
        assert_eq!(series.column(0), Some(&[][..]));
    }

    #[test]
    fn columns() {
        let mut series: TimeSeriesMulti<i32> = TimeSeriesMulti::new(1);
        series.add_data(0.0, &[1]).unwrap();
        series.add_data(0.5, &[2]).unwrap();

        series.add_column(&[3, 4]).unwrap();
        assert_eq!(series.columns(), 2);
        assert_eq!(series.data(1, 1), Some(&4));

        assert_eq!(
            series.add_column(&[5]),
            Err(Error::LengthMismatch {
                times: 2,
                values: 1
            })
        );

        series.add_data(1.0, &[5, 6]).unwrap();
        assert_eq!(series.len(), 3);

        series.clear();
        assert!(series.is_empty());
        assert_eq!(series.columns(), 2);
        assert_eq!(series.last_data(0), None);
    }
}

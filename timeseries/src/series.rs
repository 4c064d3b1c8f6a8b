// Copyright 2020 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Error;
use log::debug;

/// A `TimeSeries` stores one value of type `V` for each time of type `T`.
///
/// Times and values are held in two parallel vectors which always have the
/// same length.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries<V = f64, T = f64> {
    times: Vec<T>,
    values: Vec<V>,
}

impl<V, T> Default for TimeSeries<V, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, T> TimeSeries<V, T> {
    /// Create an empty `TimeSeries`.
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create an empty `TimeSeries` with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Append a single sample.
    pub fn add_data(&mut self, time: T, value: V) {
        self.times.push(time);
        self.values.push(value);
    }

    /// Append a batch of samples from parallel collections. Nothing is
    /// appended unless both have the same length.
    pub fn add_series(&mut self, times: &[T], values: &[V]) -> Result<(), Error>
    where
        T: Clone,
        V: Clone,
    {
        if times.len() != values.len() {
            debug!(
                "rejecting batch of {} times and {} values",
                times.len(),
                values.len()
            );
            return Err(Error::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }

        self.times.extend_from_slice(times);
        self.values.extend_from_slice(values);
        Ok(())
    }

    pub fn time(&self, index: usize) -> Option<&T> {
        self.times.get(index)
    }

    pub fn data(&self, index: usize) -> Option<&V> {
        self.values.get(index)
    }

    /// Returns the time and value of the sample at `index`.
    pub fn get(&self, index: usize) -> Option<(&T, &V)> {
        Some((self.times.get(index)?, self.values.get(index)?))
    }

    /// Returns the most recently appended value.
    pub fn last_data(&self) -> Option<&V> {
        self.values.last()
    }

    /// Returns the most recently appended time.
    pub fn last_time(&self) -> Option<&T> {
        self.times.last()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[T] {
        &self.times
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Iterate over `(time, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &V)> + '_ {
        self.times.iter().zip(self.values.iter())
    }

    /// Remove all samples, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.times.clear();
        self.values.clear();
    }

    pub fn reserve(&mut self, additional: usize) {
        self.times.reserve(additional);
        self.values.reserve(additional);
    }
}

impl<V, T> Extend<(T, V)> for TimeSeries<V, T> {
    fn extend<I: IntoIterator<Item = (T, V)>>(&mut self, iter: I) {
        for (time, value) in iter {
            self.add_data(time, value);
        }
    }
}

impl<V, T> FromIterator<(T, V)> for TimeSeries<V, T> {
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        let mut series = Self::new();
        series.extend(iter);
        series
    }
}

impl<'a, V, T> IntoIterator for &'a TimeSeries<V, T> {
    type Item = (&'a T, &'a V);
    type IntoIter = core::iter::Zip<core::slice::Iter<'a, T>, core::slice::Iter<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter().zip(self.values.iter())
    }
}

// Copyright 2020 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Containers which pair a time with each data sample.
//!
//! A [`TimeSeries`] holds one value per time, a [`TimeSeriesMulti`] holds a
//! fixed number of value columns per time. The time type defaults to `f64`
//! seconds but any of the `timecode` types can be used instead:
//!
//! ```
//! use timeseries::{Time9, TimeSeries};
//!
//! let mut series: TimeSeries<f64, Time9> = TimeSeries::new();
//! series.add_data(Time9::from_secs_f64(0.5), 1.0);
//! series.add_data(Time9::from_secs_f64(1.0), 2.0);
//!
//! assert_eq!(series.len(), 2);
//! assert_eq!(series.last_data(), Some(&2.0));
//! ```
//!
//! Samples are kept in the order they were added. Neither container checks
//! that times are increasing.

mod error;
mod multi;
mod series;

pub use error::Error;
pub use multi::TimeSeriesMulti;
pub use series::TimeSeries;

pub use timecode::{Time12, Time6, Time9};

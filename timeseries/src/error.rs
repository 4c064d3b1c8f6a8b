// Copyright 2020 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

/// Errors returned when appending to a series.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("got {times} times but {values} values")]
    LengthMismatch { times: usize, values: usize },
    #[error("series has {expected} columns but the row has {actual} values")]
    ColumnMismatch { expected: usize, actual: usize },
}

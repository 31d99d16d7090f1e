#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Field parsing and summary aggregation over flight datasets.
//!
//! [`parse`] converts raw scraped text fields into typed numeric values,
//! tolerating missing and malformed input. [`summary`] consumes a dataset
//! and produces the fixed set of aggregate views served by the API. Both
//! are pure, synchronous, single-pass computations over the in-memory
//! dataset with no shared state and no I/O.

pub mod parse;
pub mod summary;

pub use summary::summarize;

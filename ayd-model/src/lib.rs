//! Core types for the agricultural yield dashboard.
//!
//! This crate owns the typed representation of the two input datasets:
//! one row of the yield CSV ([`YieldRecord`]) and one world boundary
//! feature ([`BoundaryFeature`]), plus the session [`Selection`] and the
//! [`Dataset`] wrapper that loads both sources together.

pub mod boundary;
pub mod dataset;
pub mod record;
pub mod selection;

pub use boundary::{BoundaryFeature, Ring, WorldAtlas};
pub use dataset::Dataset;
pub use record::{records_from_csv, Metric, YieldRecord};
pub use selection::{CountryFilter, Selection, YearFilter, ALL_TIME, WORLDWIDE};

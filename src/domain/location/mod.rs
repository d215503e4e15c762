//! Location module - Coverage resolution for the launch area.

mod coverage;

pub use coverage::{in_coverage, resolve, CoverageResolution, COVERAGE_KEYWORDS, MEDELLIN};

//! Integration tests for the ROI derivation engine
//!
//! Tests are organized by topic:
//! - `reference` - The documented default scenario, field by field
//! - `properties` - Determinism, additivity, monotonicity, zero-division
//! - `edge_cases` - Negative savings, zero benefits, unbounded percentages
//! - `schema` - The serialized parameter/metric schemas

mod edge_cases;

//! # Insights Analytics
//!
//! This crate provides the pure logic of the insights pipeline: resolving a
//! requested `Period` into its date range and the range immediately before
//! it, comparing the two periods' signup counts, and rendering the spoken
//! narrative.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every function takes its inputs as values and
//!   produces a value. Identical inputs produce identical output, which makes
//!   the narrative deterministic and easy to test.
//!
//! ## Public API
//!
//! - `range::resolve`: The range calculator for all three period variants.
//! - `comparison::compare`: The period-over-period comparison.
//! - `report::render`: The narrative generator, plus the fixed spoken phrases.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod comparison;
pub mod error;
pub mod range;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use comparison::{ChangeDirection, ComparisonResult, compare};
pub use error::AnalyticsError;
pub use range::resolve;
pub use report::render;

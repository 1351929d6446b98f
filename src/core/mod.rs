//! Core domain logic for arabic-quality
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Issue, CheckResult, LengthBounds, QualityReport)
//! - `services/` - The detectors and the report aggregator

pub mod models;
pub mod services;

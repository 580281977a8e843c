//! # PanelCut Core
//!
//! Core types and utilities for PanelCut.
//! Provides the cutting request data model, the shared error type,
//! and unit conversion helpers used across the workspace.

pub mod data;
pub mod error;
pub mod units;

pub use data::{CuttingOptions, CuttingRequest, EdgingSpec, GrainAlignment, PanelSpec, SupplyMode};

pub use error::{Error, RequestError, Result};

pub use units::MeasurementSystem;

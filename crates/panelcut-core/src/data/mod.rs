//! Data models for cutting requests
//!
//! This module provides:
//! - Panel specifications with quantities, labels and edge banding
//! - Supply mode (factory or client supplied material)
//! - The cutting request consumed by the optimizer

pub mod panel;
pub mod request;

pub use panel::{EdgingSpec, GrainAlignment, PanelSpec};
pub use request::{CuttingOptions, CuttingRequest, SupplyMode};

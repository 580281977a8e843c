//! Panel optimizer facade
//!
//! Ties the pipeline together: expand specs into pieces, pack them onto
//! boards, derive cut lines, aggregate the summary and, for full requests,
//! compute edging.

use crate::cuts::finalize_boards;
use crate::edging::{calculate_edging, EdgingSummary};
use crate::error::OptimizerResult;
use crate::expander::expand_panels;
use crate::packing::PackingEngine;
use crate::summary::summarize;
use crate::types::{BoardLayout, BoardParameters, OptimizationSummary};
use crate::validation::{RequestValidator, ValidationLimits};
use chrono::{DateTime, Utc};
use panelcut_core::{CuttingRequest, PanelSpec, SupplyMode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Complete answer to a [`CuttingRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingResult {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub supply: SupplyMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub layouts: Vec<BoardLayout>,
    pub summary: OptimizationSummary,
    pub edging: EdgingSummary,
}

impl CuttingResult {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> OptimizerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Edging meters to bill, honouring client-supplied edging
    pub fn billable_edging_meters(&self) -> f64 {
        self.edging.effective_meters(&self.supply)
    }
}

/// Cutting-layout optimizer for one stock board size
#[derive(Debug, Clone)]
pub struct PanelOptimizer {
    params: BoardParameters,
    validator: RequestValidator,
}

impl PanelOptimizer {
    /// Create an optimizer, rejecting unusable board parameters
    pub fn new(params: BoardParameters) -> OptimizerResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            validator: RequestValidator::default(),
        })
    }

    /// Replace the request validation limits
    pub fn with_limits(mut self, limits: ValidationLimits) -> Self {
        self.validator = RequestValidator::new(limits);
        self
    }

    pub fn params(&self) -> &BoardParameters {
        &self.params
    }

    pub fn limits(&self) -> &ValidationLimits {
        self.validator.limits()
    }

    /// Pack `panels` onto boards and aggregate the summary.
    ///
    /// Edging is not computed here; `total_edging_meters` stays zero.
    pub fn optimize(&self, panels: &[PanelSpec]) -> (Vec<BoardLayout>, OptimizationSummary) {
        Self::optimize_with(&self.params, panels)
    }

    fn optimize_with(
        params: &BoardParameters,
        panels: &[PanelSpec],
    ) -> (Vec<BoardLayout>, OptimizationSummary) {
        let candidates = expand_panels(panels);
        info!(
            "Optimizing {} pieces from {} panel types on {}x{}mm boards (kerf {}mm)",
            candidates.len(),
            panels.len(),
            params.width,
            params.length,
            params.kerf
        );

        let mut boards = PackingEngine::new(*params).pack(candidates);
        finalize_boards(&mut boards);
        let summary = summarize(&boards, panels, params);

        info!(
            "Packed {} panels onto {} boards, waste {:.2}%",
            summary.total_panels, summary.total_boards, summary.total_waste_percent
        );

        (boards, summary)
    }

    /// Validate and optimize a full request.
    ///
    /// The request's kerf, when given, overrides the configured one for this
    /// run only. Edging totals are merged into the summary.
    pub fn run(&self, request: &CuttingRequest) -> OptimizerResult<CuttingResult> {
        self.validator.validate(request, &self.params)?;

        let params = match request.kerf() {
            Some(kerf) => self.params.with_kerf(kerf),
            None => self.params,
        };
        params.validate()?;
        debug!("Running request with supply mode {}", request.supply);

        let (layouts, mut summary) = Self::optimize_with(&params, &request.panels);
        let edging = calculate_edging(&request.panels);
        summary.merge_edging(edging.total_meters);

        Ok(CuttingResult {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            supply: request.supply,
            project_name: request.project_name.clone(),
            customer_name: request.customer_name.clone(),
            layouts,
            summary,
            edging,
        })
    }
}

//! Cutting requests
//!
//! The request is the unit of work handed to the optimizer: the panel list,
//! who supplies the boards and edging, and run options.

use super::panel::PanelSpec;
use crate::error::{RequestError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Who supplies the boards and edging tape
///
/// On the wire this is expressed as the two flags `client_supply` /
/// `factory_supply` plus the client quantities; exactly one flag may be set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SupplyFlags", into = "SupplyFlags")]
pub enum SupplyMode {
    /// The factory supplies boards and edging
    Factory,
    /// The client brings their own boards and, optionally, edging
    Client {
        /// Number of boards the client brings
        board_qty: u32,
        /// Meters of edging the client brings, if stated
        edging_meters: Option<f64>,
    },
}

impl Default for SupplyMode {
    fn default() -> Self {
        Self::Factory
    }
}

impl SupplyMode {
    pub fn is_client(&self) -> bool {
        matches!(self, Self::Client { .. })
    }
}

impl fmt::Display for SupplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factory => write!(f, "factory"),
            Self::Client { .. } => write!(f, "client"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SupplyFlags {
    #[serde(default)]
    client_supply: bool,
    #[serde(default = "default_factory_supply")]
    factory_supply: bool,
    #[serde(default)]
    client_board_qty: Option<u32>,
    #[serde(default)]
    client_edging_meters: Option<f64>,
}

fn default_factory_supply() -> bool {
    true
}

impl TryFrom<SupplyFlags> for SupplyMode {
    type Error = RequestError;

    fn try_from(flags: SupplyFlags) -> std::result::Result<Self, Self::Error> {
        match (flags.client_supply, flags.factory_supply) {
            (true, true) => Err(RequestError::InvalidSupplyMode {
                reason: "only one of client_supply or factory_supply can be true".to_string(),
            }),
            (false, false) => Err(RequestError::InvalidSupplyMode {
                reason: "either client_supply or factory_supply must be true".to_string(),
            }),
            (false, true) => Ok(Self::Factory),
            (true, false) => match flags.client_board_qty {
                Some(board_qty) if board_qty > 0 => Ok(Self::Client {
                    board_qty,
                    edging_meters: flags.client_edging_meters,
                }),
                _ => Err(RequestError::InvalidSupplyMode {
                    reason: "client_board_qty is required when client_supply is true"
                        .to_string(),
                }),
            },
        }
    }
}

impl From<SupplyMode> for SupplyFlags {
    fn from(mode: SupplyMode) -> Self {
        match mode {
            SupplyMode::Factory => Self {
                client_supply: false,
                factory_supply: true,
                client_board_qty: None,
                client_edging_meters: None,
            },
            SupplyMode::Client {
                board_qty,
                edging_meters,
            } => Self {
                client_supply: true,
                factory_supply: false,
                client_board_qty: Some(board_qty),
                client_edging_meters: edging_meters,
            },
        }
    }
}

/// Per-request run options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingOptions {
    /// Saw blade clearance in mm
    #[serde(default = "default_kerf")]
    pub kerf: f64,
}

fn default_kerf() -> f64 {
    3.0
}

impl Default for CuttingOptions {
    fn default() -> Self {
        Self {
            kerf: default_kerf(),
        }
    }
}

/// A complete cutting request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CuttingRequest {
    pub panels: Vec<PanelSpec>,
    #[serde(default)]
    pub supply: SupplyMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<CuttingOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CuttingRequest {
    pub fn new(panels: Vec<PanelSpec>) -> Self {
        Self {
            panels,
            ..Self::default()
        }
    }

    /// Parse a request from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a request from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Kerf requested in the options, if any
    pub fn kerf(&self) -> Option<f64> {
        self.options.as_ref().map(|o| o.kerf)
    }

    /// Number of physical pieces across all panel specs
    pub fn total_pieces(&self) -> u64 {
        self.panels.iter().map(|p| u64::from(p.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_supply_defaults_to_factory() {
        let request = CuttingRequest::from_json_str(r#"{"panels": []}"#).unwrap();
        assert_eq!(request.supply, SupplyMode::Factory);
        assert!(request.kerf().is_none());
    }

    #[test]
    fn test_client_supply_parsing() {
        let json = r#"{
            "panels": [{"width": 600, "length": 400, "quantity": 2}],
            "supply": {"client_supply": true, "factory_supply": false,
                       "client_board_qty": 4, "client_edging_meters": 12.5},
            "options": {"kerf": 4}
        }"#;
        let request = CuttingRequest::from_json_str(json).unwrap();

        assert_eq!(
            request.supply,
            SupplyMode::Client {
                board_qty: 4,
                edging_meters: Some(12.5)
            }
        );
        assert!(request.supply.is_client());
        assert_eq!(request.kerf(), Some(4.0));
        assert_eq!(request.total_pieces(), 2);
    }

    #[test]
    fn test_conflicting_supply_flags_rejected() {
        let json = r#"{"panels": [], "supply": {"client_supply": true, "factory_supply": true,
                                                "client_board_qty": 2}}"#;
        let err = CuttingRequest::from_json_str(json).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(err.to_string().contains("only one of"));

        let json = r#"{"panels": [], "supply": {"factory_supply": false}}"#;
        let err = CuttingRequest::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("must be true"));
    }

    #[test]
    fn test_client_supply_requires_board_qty() {
        let json = r#"{"panels": [], "supply": {"client_supply": true, "factory_supply": false}}"#;
        let err = CuttingRequest::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("client_board_qty"));
    }

    #[test]
    fn test_supply_mode_serializes_as_flags() {
        let value = serde_json::to_value(SupplyMode::Client {
            board_qty: 3,
            edging_meters: None,
        })
        .unwrap();

        assert_eq!(value["client_supply"], true);
        assert_eq!(value["factory_supply"], false);
        assert_eq!(value["client_board_qty"], 3);
        assert_eq!(SupplyMode::Factory.to_string(), "factory");
    }

    #[test]
    fn test_options_default_kerf() {
        let json = r#"{"panels": [], "options": {}}"#;
        let request = CuttingRequest::from_json_str(json).unwrap();
        assert_eq!(request.kerf(), Some(3.0));
    }
}

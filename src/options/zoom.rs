use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Zoom speed and limits, shared by both projection strategies.
pub struct ZoomOptions {
    /// Zoom speed multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub speed: f32,
    /// Nearest the controlled zoom scalar may go.
    #[schemars(title = "Near Limit", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub near_limit: f32,
    /// Farthest the controlled zoom scalar may go.
    #[schemars(title = "Far Limit", range(min = 1.0, max = 100.0), extend("step" = 0.5))]
    pub far_limit: f32,
    /// Zoom level a freshly constructed strategy starts from.
    #[schemars(title = "Starting Zoom", range(min = 0.5, max = 100.0), extend("step" = 0.5))]
    pub starting_zoom: f32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            speed: 4.0,
            near_limit: 2.0,
            far_limit: 16.0,
            starting_zoom: 5.0,
        }
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Rig placement and movement speed parameters.
pub struct CameraOptions {
    /// Camera child offset from the rig pivot: distance behind, height
    /// above.
    #[schemars(skip)]
    pub offset: [f32; 2],
    /// Height above the pivot the camera aims at.
    #[schemars(title = "Look-At Offset", range(min = 0.0, max = 10.0), extend("step" = 0.5))]
    pub look_at_offset: f32,
    /// Sideways move speed in units per second.
    #[schemars(title = "Lateral Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub lateral_speed: f32,
    /// Forward/backward move speed in units per second.
    #[schemars(title = "In-Out Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub in_out_speed: f32,
    /// Rotation speed in degrees per second.
    #[schemars(title = "Rotate Speed", range(min = 5.0, max = 180.0), extend("step" = 5.0))]
    pub rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            offset: [10.0, 14.0],
            look_at_offset: 2.0,
            lateral_speed: 5.0,
            in_out_speed: 5.0,
            rotate_speed: 45.0,
        }
    }
}

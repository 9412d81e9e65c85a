use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bounds", inline)]
#[serde(default)]
/// Ground-plane rectangle the rig may move within.
pub struct BoundsOptions {
    /// Minimum x/z corner.
    #[schemars(skip)]
    pub min: [f32; 2],
    /// Maximum x/z corner.
    #[schemars(skip)]
    pub max: [f32; 2],
}

impl Default for BoundsOptions {
    fn default() -> Self {
        Self {
            min: [-50.0, -50.0],
            max: [50.0, 50.0],
        }
    }
}

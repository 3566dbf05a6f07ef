//! Construction parameters of the scene graph.

/// A structure containing configuration data for `SceneGraph`. It derives
/// serde traits so hosts can embed it in their own settings files; missing
/// fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneGraphParams {
    /// The number of nodes to reserve storage for up front.
    pub capacity: usize,
    /// Scale components with a magnitude below this are treated as zero when
    /// transforming points from world space into local space.
    pub scale_epsilon: f32,
}

impl Default for SceneGraphParams {
    fn default() -> Self {
        SceneGraphParams {
            capacity: 0,
            scale_epsilon: 0.000_001,
        }
    }
}

//! Direction blending configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Weight decay family
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecayKind {
    #[default]
    Geometric,
    Square,
}

/// Look-ahead blending settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BlendingSection {
    #[serde(default)]
    pub decay: DecayKind,

    /// Geometric decay ratio, ignored for square decay
    #[serde(default = "defaults::decay_ratio")]
    pub ratio: f64,

    /// Guide points blended per step
    #[serde(default = "defaults::lookahead")]
    pub lookahead: usize,
}

impl Default for BlendingSection {
    fn default() -> Self {
        Self {
            decay: DecayKind::default(),
            ratio: defaults::decay_ratio(),
            lookahead: defaults::lookahead(),
        }
    }
}

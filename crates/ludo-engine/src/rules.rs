//! Rule options.
//!
//! The engine plays one fixed rule set; these switches cover the points
//! where house rules commonly differ.

use serde::{Deserialize, Serialize};

/// Configurable rule switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    /// Pieces standing on a star cell cannot be captured.
    ///
    /// Disable to let captures happen on every main-path cell.
    pub safe_zones_protect: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        RuleOptions {
            safe_zones_protect: true,
        }
    }
}

impl RuleOptions {
    /// Captures allowed everywhere, star cells included.
    pub const fn unprotected() -> Self {
        RuleOptions {
            safe_zones_protect: false,
        }
    }
}

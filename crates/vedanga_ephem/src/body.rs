//! Bodies the ephemeris can position.

use serde::{Deserialize, Serialize};

/// The 8 bodies with directly computed positions.
///
/// Ketu is not listed: it is always the mean node plus 180° and is derived
/// by the chart layer, never queried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Mean ascending lunar node (Rahu).
    MeanNode,
}

/// All bodies in canonical order.
pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::MeanNode,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::MeanNode => "Mean Node",
        }
    }

    /// Whether rise/set queries are supported for this body.
    pub const fn has_rise_set(self) -> bool {
        matches!(self, Self::Sun | Self::Moon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_bodies_count() {
        assert_eq!(ALL_BODIES.len(), 8);
    }

    #[test]
    fn rise_set_only_luminaries() {
        assert!(Body::Sun.has_rise_set());
        assert!(Body::Moon.has_rise_set());
        assert!(!Body::Mars.has_rise_set());
        assert!(!Body::MeanNode.has_rise_set());
    }
}

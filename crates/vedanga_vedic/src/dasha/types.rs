//! Shared dasha period types.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;

/// Julian-year convention used by every dasha engine.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// The five Vimshottari nesting levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DashaLevel {
    Maha,
    Antara,
    Pratyantara,
    Sookshma,
    Prana,
}

pub const ALL_LEVELS: [DashaLevel; 5] = [
    DashaLevel::Maha,
    DashaLevel::Antara,
    DashaLevel::Pratyantara,
    DashaLevel::Sookshma,
    DashaLevel::Prana,
];

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maha => "Mahadasha",
            Self::Antara => "Antardasha",
            Self::Pratyantara => "Pratyantardasha",
            Self::Sookshma => "Sookshma",
            Self::Prana => "Prana",
        }
    }

    pub const fn depth(self) -> u8 {
        self as u8
    }

    /// The next finer level, if any.
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Maha => Some(Self::Antara),
            Self::Antara => Some(Self::Pratyantara),
            Self::Pratyantara => Some(Self::Sookshma),
            Self::Sookshma => Some(Self::Prana),
            Self::Prana => None,
        }
    }
}

/// One Vimshottari period at any level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: Planet,
    pub level: DashaLevel,
    pub start_jd: f64,
    pub end_jd: f64,
    /// 1-based position among siblings.
    pub order: u16,
}

impl DashaPeriod {
    pub fn span_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_descend() {
        let mut level = DashaLevel::Maha;
        let mut depth = 0;
        while let Some(next) = level.child() {
            depth += 1;
            assert_eq!(next.depth(), depth);
            level = next;
        }
        assert_eq!(level, DashaLevel::Prana);
        assert_eq!(depth, 4);
    }

    #[test]
    fn containment_half_open() {
        let p = DashaPeriod {
            lord: Planet::Rahu,
            level: DashaLevel::Maha,
            start_jd: 100.0,
            end_jd: 200.0,
            order: 1,
        };
        assert!(p.contains(100.0));
        assert!(p.contains(199.999));
        assert!(!p.contains(200.0));
        assert!((p.span_days() - 100.0).abs() < 1e-12);
    }
}

//! Graha aspect tables.
//!
//! Parashari sign aspects: every graha aspects the 7th from itself;
//! Mars adds 4th and 8th, Jupiter 5th and 9th, Saturn 3rd and 10th.
//! The table is closed: a derived aspect outside it is a caller bug,
//! surfaced as an integrity violation rather than an empty result.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::planet::Planet;

/// Aspect and activation kinds recognized by the transit scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Third,
    Fourth,
    Fifth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    /// Transit inside the nakshatra holding a natal point.
    NakshatraActivation,
    /// Transit inside a water-fire junction band.
    GandantaCrossing,
}

impl AspectKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Third => "3rd",
            Self::Fourth => "4th",
            Self::Fifth => "5th",
            Self::Seventh => "7th",
            Self::Eighth => "8th",
            Self::Ninth => "9th",
            Self::Tenth => "10th",
            Self::NakshatraActivation => "nakshatra activation",
            Self::GandantaCrossing => "gandanta crossing",
        }
    }

    /// 0-based sign offset for house aspects; None for activation kinds.
    pub const fn house_offset(self) -> Option<u8> {
        match self {
            Self::Conjunction => Some(0),
            Self::Third => Some(2),
            Self::Fourth => Some(3),
            Self::Fifth => Some(4),
            Self::Seventh => Some(6),
            Self::Eighth => Some(7),
            Self::Ninth => Some(8),
            Self::Tenth => Some(9),
            Self::NakshatraActivation | Self::GandantaCrossing => None,
        }
    }

    pub const fn is_house_aspect(self) -> bool {
        self.house_offset().is_some()
    }
}

/// The house aspects a graha can cast.
pub const fn allowed_aspects(planet: Planet) -> &'static [AspectKind] {
    match planet {
        Planet::Mars => &[
            AspectKind::Conjunction,
            AspectKind::Fourth,
            AspectKind::Seventh,
            AspectKind::Eighth,
        ],
        Planet::Jupiter => &[
            AspectKind::Conjunction,
            AspectKind::Fifth,
            AspectKind::Seventh,
            AspectKind::Ninth,
        ],
        Planet::Saturn => &[
            AspectKind::Conjunction,
            AspectKind::Third,
            AspectKind::Seventh,
            AspectKind::Tenth,
        ],
        _ => &[AspectKind::Conjunction, AspectKind::Seventh],
    }
}

/// Check a requested house aspect against the caster's table.
///
/// Activation kinds are not house aspects and pass for any graha.
pub fn validate_aspect(planet: Planet, kind: AspectKind) -> Result<(), VedicError> {
    if !kind.is_house_aspect() {
        return Ok(());
    }
    if allowed_aspects(planet).contains(&kind) {
        Ok(())
    } else {
        Err(VedicError::IntegrityViolation(format!(
            "{} cannot cast a {} aspect",
            planet.name(),
            kind.name()
        )))
    }
}

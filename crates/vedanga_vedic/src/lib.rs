//! Pure Vedic astrology math: signs, nakshatras, divisional charts,
//! KP sub-lords, Ashtakavarga, graha aspects, upagrahas, and the
//! Vimshottari / Shoola dasha engines.
//!
//! Everything here is deterministic arithmetic on sidereal longitudes.
//! No ephemeris access, no clocks, no I/O.

pub mod ashtakavarga;
pub mod aspect;
pub mod dasha;
pub mod error;
pub mod nakshatra;
pub mod planet;
pub mod sign;
pub mod sublord;
pub mod upagraha;
pub mod util;
pub mod varga;

pub use error::VedicError;
pub use nakshatra::{NAKSHATRA_COUNT, NAKSHATRA_SPAN_DEG, Nakshatra, PadaPosition};
pub use planet::{ALL_PLANETS, Planet, SAPTA_GRAHAS, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS};
pub use sign::{ALL_SIGNS, Dignity, Element, Quality, Sign, sign_from_longitude};
pub use sublord::{SubLordChain, sub_lord_chain};
pub use util::normalize_360;
pub use varga::{SUPPORTED_DIVISIONS, VargaPosition, varga_position};

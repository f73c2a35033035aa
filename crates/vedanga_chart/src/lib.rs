//! Chart assembly: birth input to rashi chart, plus the derived
//! divisional and KP views and the fingerprint cache.

pub mod builder;
pub mod cache;
pub mod chart;
pub mod divisional;
pub mod error;
pub mod fingerprint;
pub mod input;
pub mod kp;

pub use builder::{ChartBuilder, whole_sign_houses};
pub use cache::ChartCache;
pub use chart::{Ascendant, D1Chart, Placement};
pub use divisional::{DivisionalChart, DivisionalPlacement, divisional_chart};
pub use error::ChartError;
pub use fingerprint::fingerprint;
pub use input::{BirthMoment, ResolvedBirth};
pub use kp::{KP_AYANAMSA_CORRECTION_DEG, KpChart, KpConfig, KpPoint, kp_chart};

//! Planetary period (dasha) engines.

pub mod shoola;
pub mod types;
pub mod vimshottari;

pub use shoola::{SHOOLA_TOTAL_YEARS, ShoolaEntry, ShoolaInputs, shoola_dasha, shoola_start_sign};
pub use types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};
pub use vimshottari::{children, mahadashas, snapshot};

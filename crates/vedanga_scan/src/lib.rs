//! Timeline layer: transit scanning, Panchang solving, event-timing
//! forecasts, and category analysis built on the chart layer.

pub mod analysis;
pub mod error;
pub mod event_timing;
pub mod panchang;
pub mod transit;

pub use analysis::{CategoryScore, ComponentBreakdown, ComponentWeights, analyze, weights};
pub use error::ScanError;
pub use event_timing::{
    Category, EventTimer, EventTimingForecast, Intensity, MonthForecast, Trigger,
};
pub use panchang::{
    Choghadiya, ChoghadiyaSlot, MasaInfo, MonthConvention, Paksha, Panchang, PanchangQuery,
    PanchangSolver, TithiInfo, tithi_at, tithi_end_jd,
};
pub use transit::{
    GANDANTA_BANDS, MAX_WINDOW_YEARS, STEP_DAYS, TransitScanner, TransitWindow, in_gandanta_band,
};

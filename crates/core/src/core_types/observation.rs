//! Normalized hourly weather observations consumed by the risk scorer
//!
//! The data-acquisition collaborator (geocoding, forecast APIs, fallback
//! chains) lives outside this crate; it hands over one immutable
//! [`WeatherObservation`] per forecast hour with units already normalized
//! (temperature to °F, wind to mph, precipitation to inches). The scorer never
//! fails on a record: fields a provider could not supply default to zero and
//! contribute nothing, and [`WeatherObservation::from_raw`] sanitizes
//! out-of-range values instead of propagating them.

use crate::core_types::units::{
    Fahrenheit, Inches, JoulesPerKilogram, MilesPerHour, Percent, SquareMetersPerSecondSquared,
};
use serde::{Deserialize, Serialize};

/// Meteorological season, derived externally from the calendar month
///
/// Selects the seasonal scoring profile and the storm-readiness thresholds.
/// Uses Northern Hemisphere meteorological seasons (Mar-May spring, Jun-Aug
/// summer, Sep-Nov fall, Dec-Feb winter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// March through May: peak severe weather season in the US plains
    Spring,
    /// June through August: high instability, weakly sheared pulse storms
    Summer,
    /// September through November: secondary severe season, strong shear
    Fall,
    /// December through February: convection is rare and poorly sampled
    Winter,
}

impl Season {
    /// Derive the meteorological season from a calendar month (1-12).
    ///
    /// Months outside 1-12 map to winter, the most conservative profile.
    #[must_use]
    pub fn from_month(month: u8) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }
}

/// One normalized forecast hour of convective parameters
///
/// Immutable input record for the risk scorer. Optional upstream fields
/// (shear, SRH) are zero when unavailable and contribute no points.
///
/// # Example
/// ```
/// use storm_risk_core::core_types::WeatherObservation;
///
/// // Raw provider values, sanitized at the boundary
/// let obs = WeatherObservation::from_raw(3200.0, -20.0, 50.0, 0.5, 85.0, 68.0, 35.0, 120.0);
/// assert_eq!(*obs.cape, 3200.0);
/// assert_eq!(*obs.cin, -20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Convective Available Potential Energy (J/kg, >= 0)
    pub cape: JoulesPerKilogram,
    /// Convective Inhibition (J/kg, 0 or negative; more negative = stronger cap)
    pub cin: JoulesPerKilogram,
    /// Surface wind gusts (mph)
    pub wind_gust: MilesPerHour,
    /// Precipitation over the forecast hour (inches)
    pub precipitation: Inches,
    /// Relative humidity (%)
    pub humidity: Percent,
    /// Surface dewpoint (°F)
    pub dewpoint: Fahrenheit,
    /// 0-6 km bulk shear magnitude (mph); 0 if unavailable
    pub shear: MilesPerHour,
    /// 0-3 km storm-relative helicity (m²/s²); 0 if unavailable
    pub srh: SquareMetersPerSecondSquared,
}

impl WeatherObservation {
    /// Create an observation from already-validated unit values
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        cape: JoulesPerKilogram,
        cin: JoulesPerKilogram,
        wind_gust: MilesPerHour,
        precipitation: Inches,
        humidity: Percent,
        dewpoint: Fahrenheit,
        shear: MilesPerHour,
        srh: SquareMetersPerSecondSquared,
    ) -> Self {
        WeatherObservation {
            cape,
            cin,
            wind_gust,
            precipitation,
            humidity,
            dewpoint,
            shear,
            srh,
        }
    }

    /// Create an observation from raw provider floats, sanitizing instead of
    /// failing.
    ///
    /// Negative CAPE, gusts, precipitation, shear and SRH clamp to zero;
    /// humidity clamps into [0, 100]. CIN keeps its sign: providers report it
    /// as zero or negative, and any non-negative value lands in the uncapped
    /// tier of the point table.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn from_raw(
        cape_jkg: f32,
        cin_jkg: f32,
        wind_gust_mph: f32,
        precipitation_in: f32,
        humidity_pct: f32,
        dewpoint_f: f32,
        shear_mph: f32,
        srh_m2s2: f32,
    ) -> Self {
        WeatherObservation {
            cape: JoulesPerKilogram::new(cape_jkg).max_zero(),
            cin: JoulesPerKilogram::new(cin_jkg),
            wind_gust: MilesPerHour::from(wind_gust_mph),
            precipitation: Inches::from(precipitation_in),
            humidity: Percent::clamped(humidity_pct),
            dewpoint: Fahrenheit::from(dewpoint_f),
            shear: MilesPerHour::from(shear_mph),
            srh: SquareMetersPerSecondSquared::from(srh_m2s2),
        }
    }

    /// True if the hour already carries measurable precipitation
    /// (>= 0.01 in, the standard rain-gauge resolution)
    #[inline]
    #[must_use]
    pub fn has_measurable_precip(&self) -> bool {
        self.precipitation >= Inches::MEASURABLE
    }

    /// Strength of the convective cap as a positive magnitude (|CIN|)
    #[inline]
    #[must_use]
    pub fn cap_strength(&self) -> JoulesPerKilogram {
        self.cin.abs()
    }
}

//! Severe weather risk scoring
//!
//! Converts one [`WeatherObservation`] into a bounded 0-100 risk score via an
//! additive point system. Categories are evaluated independently and summed;
//! within a category the highest tier met wins. Every threshold is inclusive.
//! The final score is clamped into [0, 100] and the clamp is reported via the
//! `capped` flag.
//!
//! The scorer is pure, deterministic and total: it performs no I/O, holds no
//! state, and never errors — absent optional fields arrive as zero and simply
//! contribute nothing.

use crate::core_types::WeatherObservation;
use crate::scoring::profile::{MoistureTier, ScoringProfile, Tier};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Risk score category boundaries, styled after SPC convective outlook tiers.
///
/// Note: Rust `Range` types use **inclusive lower bound and exclusive upper
/// bound** [a, b).
pub mod risk_ranges {
    use std::ops::{Range, RangeFrom};

    /// "Low" risk range `[0, 20)`: quiet or marginally unstable air
    pub const LOW: Range<u8> = 0..20;

    /// "Marginal" risk range `[20, 40)`: isolated strong storms possible
    pub const MARGINAL: Range<u8> = 20..40;

    /// "Slight" risk range `[40, 55)`: scattered severe storms possible
    pub const SLIGHT: Range<u8> = 40..55;

    /// "Enhanced" risk range `[55, 70)`: numerous severe storms possible
    pub const ENHANCED: Range<u8> = 55..70;

    /// "Moderate" risk range `[70, 85)`: widespread severe storms likely
    pub const MODERATE: Range<u8> = 70..85;

    /// "High" risk range `[85, 100]`: severe weather outbreak expected
    pub const HIGH: RangeFrom<u8> = 85..;
}

/// Qualitative rating derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Quiet or marginally unstable air
    Low,
    /// Isolated strong storms possible
    Marginal,
    /// Scattered severe storms possible
    Slight,
    /// Numerous severe storms possible
    Enhanced,
    /// Widespread severe storms likely
    Moderate,
    /// Severe weather outbreak expected
    High,
}

impl RiskCategory {
    /// Categorize a clamped 0-100 score
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            s if risk_ranges::LOW.contains(&s) => RiskCategory::Low,
            s if risk_ranges::MARGINAL.contains(&s) => RiskCategory::Marginal,
            s if risk_ranges::SLIGHT.contains(&s) => RiskCategory::Slight,
            s if risk_ranges::ENHANCED.contains(&s) => RiskCategory::Enhanced,
            s if risk_ranges::MODERATE.contains(&s) => RiskCategory::Moderate,
            _ => RiskCategory::High,
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskCategory::Low => "Low",
            RiskCategory::Marginal => "Marginal",
            RiskCategory::Slight => "Slight",
            RiskCategory::Enhanced => "Enhanced",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::High => "High",
        };
        write!(f, "{label}")
    }
}

/// Scoring factor a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Factor {
    /// Convective Available Potential Energy
    Cape,
    /// Surface wind gusts
    WindGust,
    /// Hourly precipitation
    Precipitation,
    /// Combined humidity/dewpoint
    Moisture,
    /// Convective Inhibition (the cap)
    Cin,
    /// 0-6 km bulk shear
    Shear,
    /// Storm-relative helicity
    Srh,
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Factor::Cape => "CAPE",
            Factor::WindGust => "wind gust",
            Factor::Precipitation => "precipitation",
            Factor::Moisture => "humidity/dewpoint",
            Factor::Cin => "CIN",
            Factor::Shear => "bulk shear",
            Factor::Srh => "SRH",
        };
        write!(f, "{label}")
    }
}

/// One rule that fired during scoring, for the human-readable rationale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiredRule {
    /// Which factor the rule scored
    pub factor: Factor,
    /// Signed point contribution
    pub points: i16,
    /// Human-readable description of the tier that was met
    pub detail: String,
}

/// Bounded risk score with rationale
///
/// Invariant: `score` is always in [0, 100] regardless of what the rules
/// summed to; `capped` records that the clamp actually bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    /// Clamped score in [0, 100]
    pub score: u8,
    /// True when the raw rule sum fell outside [0, 100]
    pub capped: bool,
    /// Rules that fired, in table order
    pub fired: Vec<FiredRule>,
}

impl RiskScore {
    /// Numeric score value
    #[inline]
    #[must_use]
    pub fn value(&self) -> u8 {
        self.score
    }

    /// Qualitative rating for display
    #[must_use]
    pub fn category(&self) -> RiskCategory {
        RiskCategory::from_score(self.score)
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100 ({})", self.score, self.category())
    }
}

/// Pick the highest tier met by `value`, if any.
///
/// Tiers are ordered highest threshold first and thresholds are inclusive,
/// so the first hit wins and lower tiers are mutually excluded.
fn highest_tier_met(value: f32, tiers: &[Tier]) -> Option<Tier> {
    tiers.iter().copied().find(|tier| value >= tier.at_least)
}

/// Pick the strongest moisture tier met by the humidity/dewpoint pair, if any
fn moisture_tier_met(
    humidity_pct: f32,
    dewpoint_f: f32,
    tiers: &[MoistureTier],
) -> Option<MoistureTier> {
    tiers
        .iter()
        .copied()
        .find(|tier| humidity_pct >= tier.humidity_at_least && dewpoint_f >= tier.dewpoint_at_least)
}

/// Score one observation against a scoring profile.
///
/// Pure and total: the same input always produces the same output, and no
/// input produces an error. The result is clamped into [0, 100].
///
/// # Example
/// ```
/// use storm_risk_core::core_types::WeatherObservation;
/// use storm_risk_core::scoring::{score, ScoringProfile};
///
/// let obs = WeatherObservation::from_raw(3200.0, -20.0, 50.0, 0.5, 85.0, 68.0, 35.0, 120.0);
/// let risk = score(&obs, ScoringProfile::Baseline);
/// assert_eq!(risk.score, 75);
/// assert!(!risk.capped);
/// ```
#[must_use]
pub fn score(obs: &WeatherObservation, profile: ScoringProfile) -> RiskScore {
    let table = profile.table();
    let mut fired = Vec::with_capacity(7);
    let mut total: i16 = 0;

    let mut apply = |factor: Factor, points: i16, detail: String| {
        trace!(%factor, points, %detail, "rule fired");
        total += points;
        fired.push(FiredRule {
            factor,
            points,
            detail,
        });
    };

    if let Some(tier) = highest_tier_met(*obs.cape, &table.cape) {
        apply(
            Factor::Cape,
            tier.points,
            format!("{} meets the {:.0} J/kg tier", obs.cape, tier.at_least),
        );
    }

    if let Some(tier) = highest_tier_met(*obs.wind_gust, &table.wind_gust) {
        apply(
            Factor::WindGust,
            tier.points,
            format!("{} meets the {:.0} mph tier", obs.wind_gust, tier.at_least),
        );
    }

    if let Some(tier) = highest_tier_met(*obs.precipitation, &table.precipitation) {
        apply(
            Factor::Precipitation,
            tier.points,
            format!(
                "{} meets the {:.1} in tier",
                obs.precipitation, tier.at_least
            ),
        );
    }

    if let Some(tier) = moisture_tier_met(*obs.humidity, *obs.dewpoint, &table.moisture) {
        apply(
            Factor::Moisture,
            tier.points,
            format!(
                "{} humidity with {} dewpoint meets the {:.0}%/{:.0}°F tier",
                obs.humidity, obs.dewpoint, tier.humidity_at_least, tier.dewpoint_at_least
            ),
        );
    }

    // CIN is asymmetric: a deep cap always subtracts the full penalty no
    // matter how negative it gets, and no cap at all is a bonus. Values in
    // the open interval (moderate bound, 0) contribute nothing.
    let cin = *obs.cin;
    if cin <= table.cin_deep_at_most {
        apply(
            Factor::Cin,
            table.cin_deep_points,
            format!("{} is a strong suppressing cap", obs.cin),
        );
    } else if cin <= table.cin_moderate_at_most {
        apply(
            Factor::Cin,
            table.cin_moderate_points,
            format!("{} is a moderate suppressing cap", obs.cin),
        );
    } else if cin >= 0.0 {
        apply(
            Factor::Cin,
            table.cin_uncapped_points,
            "no convective inhibition: initiation is unimpeded".to_string(),
        );
    }

    if let Some(tier) = highest_tier_met(*obs.shear, &table.shear) {
        apply(
            Factor::Shear,
            tier.points,
            format!("{} meets the {:.0} mph tier", obs.shear, tier.at_least),
        );
    }

    if let Some(tier) = highest_tier_met(*obs.srh, &table.srh) {
        apply(
            Factor::Srh,
            tier.points,
            format!("{} meets the {:.0} m²/s² tier", obs.srh, tier.at_least),
        );
    }

    let clamped = total.clamp(0, 100);
    let capped = clamped != total;
    let result = RiskScore {
        score: clamped as u8,
        capped,
        fired,
    };

    debug!(
        score = result.score,
        capped = result.capped,
        rules = result.fired.len(),
        ?profile,
        "scored observation"
    );
    result
}

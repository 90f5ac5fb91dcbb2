//! Scoring profiles: tier thresholds and point values for the risk scorer
//!
//! Earlier dashboard revisions carried several divergent `calculate_risk`
//! implementations (fixed-threshold, seasonal, extended with shear/SRH). They
//! are unified here behind one table-driven interface: a [`ScoringProfile`]
//! selects a [`PointTable`], and the scorer in [`crate::scoring::risk`] only
//! ever walks the table. No hidden globals; the profile is passed explicitly
//! at every call site.
//!
//! All thresholds are inclusive (`>=` semantics), and within a category the
//! highest tier met wins.

use crate::core_types::Season;
use serde::{Deserialize, Serialize};

/// One inclusive threshold tier: `value >= at_least` awards `points`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Inclusive lower bound for this tier
    pub at_least: f32,
    /// Points awarded when the tier is met
    pub points: i16,
}

impl Tier {
    const fn new(at_least: f32, points: i16) -> Self {
        Tier { at_least, points }
    }
}

/// A combined humidity/dewpoint tier: both bounds must be met
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoistureTier {
    /// Inclusive relative humidity lower bound (%)
    pub humidity_at_least: f32,
    /// Inclusive dewpoint lower bound (°F)
    pub dewpoint_at_least: f32,
    /// Points awarded when both bounds are met
    pub points: i16,
}

impl MoistureTier {
    const fn new(humidity_at_least: f32, dewpoint_at_least: f32, points: i16) -> Self {
        MoistureTier {
            humidity_at_least,
            dewpoint_at_least,
            points,
        }
    }
}

/// Complete point table for one scoring variant
///
/// Tier arrays are ordered highest threshold first; the scorer stops at the
/// first tier met. The CIN rule is shared by every variant: a deep cap
/// subtracts, a moderate cap subtracts less, and an absent cap (CIN >= 0)
/// adds a bonus because nothing suppresses initiation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointTable {
    /// CAPE tiers (J/kg), highest first
    pub cape: [Tier; 3],
    /// Surface wind gust tiers (mph), highest first
    pub wind_gust: [Tier; 2],
    /// Hourly precipitation tiers (inches), highest first
    pub precipitation: [Tier; 2],
    /// Humidity/dewpoint tiers, strongest first
    pub moisture: [MoistureTier; 2],
    /// Bulk shear tiers (mph), highest first
    pub shear: [Tier; 2],
    /// Storm-relative helicity tiers (m²/s²), highest first
    pub srh: [Tier; 2],
    /// CIN at or below this subtracts `cin_deep_points` (J/kg, negative)
    pub cin_deep_at_most: f32,
    /// Penalty for a deep cap, regardless of how negative CIN gets
    pub cin_deep_points: i16,
    /// CIN at or below this (but above the deep bound) subtracts
    /// `cin_moderate_points` (J/kg, negative)
    pub cin_moderate_at_most: f32,
    /// Penalty for a moderate cap
    pub cin_moderate_points: i16,
    /// Bonus when CIN >= 0: no cap suppressing convection
    pub cin_uncapped_points: i16,
}

impl PointTable {
    /// Fixed-threshold baseline table, the canonical variant.
    ///
    /// Gust tiers 45/60 mph and CAPE tiers 1000/2000/3000 J/kg; the 58-mph
    /// and 1500/2500/3500 values seen in other revisions are rejected.
    pub const BASELINE: PointTable = PointTable {
        cape: [
            Tier::new(3000.0, 30),
            Tier::new(2000.0, 20),
            Tier::new(1000.0, 10),
        ],
        wind_gust: [Tier::new(60.0, 25), Tier::new(45.0, 15)],
        precipitation: [Tier::new(1.0, 15), Tier::new(0.3, 10)],
        moisture: [
            MoistureTier::new(80.0, 65.0, 10),
            MoistureTier::new(60.0, 60.0, 5),
        ],
        shear: [Tier::new(40.0, 10), Tier::new(30.0, 5)],
        srh: [Tier::new(150.0, 10), Tier::new(100.0, 5)],
        cin_deep_at_most: -100.0,
        cin_deep_points: -20,
        cin_moderate_at_most: -50.0,
        cin_moderate_points: -10,
        cin_uncapped_points: 10,
    };

    /// Spring re-parameterization: moderate CAPE already supports severe
    /// storms while strong dynamics dominate, so the CAPE bar drops and
    /// shear/SRH carry more weight (peak tornado season).
    pub const SPRING: PointTable = PointTable {
        cape: [
            Tier::new(2500.0, 30),
            Tier::new(1500.0, 20),
            Tier::new(750.0, 10),
        ],
        shear: [Tier::new(35.0, 15), Tier::new(25.0, 8)],
        srh: [Tier::new(200.0, 15), Tier::new(125.0, 8)],
        ..PointTable::BASELINE
    };

    /// Summer re-parameterization: high CAPE is routine in an airmass-storm
    /// regime, so the top tier needs 4000 J/kg, and weak ambient shear makes
    /// the kinematic tiers harder to reach.
    pub const SUMMER: PointTable = PointTable {
        cape: [
            Tier::new(4000.0, 30),
            Tier::new(2500.0, 20),
            Tier::new(1200.0, 10),
        ],
        shear: [Tier::new(45.0, 10), Tier::new(35.0, 5)],
        srh: [Tier::new(200.0, 10), Tier::new(150.0, 5)],
        ..PointTable::BASELINE
    };

    /// Fall re-parameterization: the secondary severe season pairs modest
    /// instability with strengthening jet-stream shear.
    pub const FALL: PointTable = PointTable {
        cape: [
            Tier::new(2000.0, 30),
            Tier::new(1200.0, 20),
            Tier::new(600.0, 10),
        ],
        shear: [Tier::new(35.0, 12), Tier::new(25.0, 6)],
        srh: [Tier::new(175.0, 12), Tier::new(110.0, 6)],
        ..PointTable::BASELINE
    };

    /// Table for a season under the seasonal variant.
    ///
    /// Winter convection is rare and poorly sampled, so no winter tuning
    /// exists; it falls back to the baseline table.
    #[must_use]
    pub const fn for_season(season: Season) -> PointTable {
        match season {
            Season::Spring => PointTable::SPRING,
            Season::Summer => PointTable::SUMMER,
            Season::Fall => PointTable::FALL,
            Season::Winter => PointTable::BASELINE,
        }
    }
}

/// Which scoring variant to apply, passed explicitly at every call site
///
/// # Example
/// ```
/// use storm_risk_core::core_types::Season;
/// use storm_risk_core::scoring::ScoringProfile;
///
/// let baseline = ScoringProfile::Baseline;
/// let july = ScoringProfile::Seasonal(Season::from_month(7));
/// assert_ne!(baseline.table(), july.table());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ScoringProfile {
    /// Fixed thresholds, the canonical table
    #[default]
    Baseline,
    /// Season-adjusted CAPE, shear and SRH tiers
    Seasonal(Season),
}

impl ScoringProfile {
    /// Resolve the point table this profile scores against
    #[must_use]
    pub const fn table(self) -> PointTable {
        match self {
            ScoringProfile::Baseline => PointTable::BASELINE,
            ScoringProfile::Seasonal(season) => PointTable::for_season(season),
        }
    }
}

//! Storm readiness: how much instability survives the cap
//!
//! Readiness is the net energy available once the suppressing cap is paid
//! for: `CAPE - |CIN|`. It is bucketed into low/moderate/high through two
//! season-dependent thresholds and is purely informational — it feeds the
//! display collaborator, never the risk score.

use crate::core_types::units::JoulesPerKilogram;
use crate::core_types::{Season, WeatherObservation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative readiness bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    /// The cap eats most or all of the available energy
    Low,
    /// Usable energy once the cap erodes
    Moderate,
    /// Ample energy; storms can fire as soon as a trigger arrives
    High,
}

impl fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReadinessLevel::Low => "Low",
            ReadinessLevel::Moderate => "Moderate",
            ReadinessLevel::High => "High",
        };
        write!(f, "{label}")
    }
}

/// Two inclusive boundaries splitting readiness into three buckets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessThresholds {
    /// Net energy at or above this is at least moderate (J/kg)
    pub moderate: JoulesPerKilogram,
    /// Net energy at or above this is high (J/kg)
    pub high: JoulesPerKilogram,
}

impl ReadinessThresholds {
    /// Season-dependent boundaries.
    ///
    /// Summer demands the most net energy because high CAPE is routine;
    /// winter the least, because any surviving instability is anomalous.
    #[must_use]
    pub const fn for_season(season: Season) -> Self {
        let (moderate, high) = match season {
            Season::Spring => (1000.0, 2000.0),
            Season::Summer => (1500.0, 3000.0),
            Season::Fall => (800.0, 1800.0),
            Season::Winter => (500.0, 1200.0),
        };
        ReadinessThresholds {
            moderate: JoulesPerKilogram::new(moderate),
            high: JoulesPerKilogram::new(high),
        }
    }

    /// Bucket a net-energy value
    #[must_use]
    pub fn bucket(&self, net_energy: JoulesPerKilogram) -> ReadinessLevel {
        if net_energy >= self.high {
            ReadinessLevel::High
        } else if net_energy >= self.moderate {
            ReadinessLevel::Moderate
        } else {
            ReadinessLevel::Low
        }
    }
}

/// Net convective energy: CAPE minus the cap magnitude.
///
/// Can be negative when the cap outweighs the instability.
#[inline]
#[must_use]
pub fn storm_readiness(obs: &WeatherObservation) -> JoulesPerKilogram {
    obs.cape - obs.cap_strength()
}

/// Bucketed storm readiness for a season
#[must_use]
pub fn readiness_level(obs: &WeatherObservation, season: Season) -> ReadinessLevel {
    ReadinessThresholds::for_season(season).bucket(storm_readiness(obs))
}

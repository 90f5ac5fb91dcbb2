//! Trigger-mechanism heuristics over consecutive forecast hours
//!
//! High CAPE alone does not make storms; something has to break the cap.
//! This module counts four boolean precursor conditions between the current
//! hour and the next — an eroding cap, surging low-level moisture,
//! strengthening shear, and precipitation already underway — and maps the
//! count to a three-level trigger outlook. It operates on ordered hourly
//! pairs, unlike the single-observation risk scorer.

use crate::core_types::{Season, WeatherObservation};
use crate::scoring::readiness::{readiness_level, ReadinessLevel};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dewpoint rise (°F per hour) that counts as a moisture surge
const DEWPOINT_SURGE_F: f32 = 2.0;

/// Shear magnitude (mph) a strengthening trend must reach to count
const SHEAR_TREND_FLOOR_MPH: f32 = 30.0;

/// Three-level trigger outlook from the precursor count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerOutlook {
    /// Three or more precursors: an active trigger is likely
    ActiveLikely,
    /// Exactly two precursors: trigger potential is present
    PotentialPresent,
    /// One or none: no trigger mechanism yet
    NoneYet,
}

impl fmt::Display for TriggerOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TriggerOutlook::ActiveLikely => "active trigger likely",
            TriggerOutlook::PotentialPresent => "trigger potential present",
            TriggerOutlook::NoneYet => "no trigger mechanism yet",
        };
        write!(f, "{label}")
    }
}

/// Precursor flags evaluated between one hour and the next
// Four independent observed conditions, not a state machine
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSignal {
    /// CIN weakening hour-over-hour (cap eroding toward zero)
    pub cin_weakening: bool,
    /// Dewpoint rising more than 2°F hour-over-hour
    pub dewpoint_surging: bool,
    /// Shear increasing and at or above 30 mph
    pub shear_strengthening: bool,
    /// Measurable precipitation already present this hour
    pub precip_ongoing: bool,
}

impl TriggerSignal {
    /// Evaluate the four precursors between `current` and `next`
    #[must_use]
    pub fn evaluate(current: &WeatherObservation, next: &WeatherObservation) -> Self {
        TriggerSignal {
            // CIN is zero or negative; moving up means the cap is eroding
            cin_weakening: next.cin > current.cin,
            dewpoint_surging: (next.dewpoint - current.dewpoint) > DEWPOINT_SURGE_F,
            shear_strengthening: next.shear > current.shear
                && *next.shear >= SHEAR_TREND_FLOOR_MPH,
            precip_ongoing: current.has_measurable_precip(),
        }
    }

    /// Number of precursors present (0-4)
    #[must_use]
    pub fn count(&self) -> u8 {
        u8::from(self.cin_weakening)
            + u8::from(self.dewpoint_surging)
            + u8::from(self.shear_strengthening)
            + u8::from(self.precip_ongoing)
    }

    /// Map the precursor count to the three-level outlook
    #[must_use]
    pub fn outlook(&self) -> TriggerOutlook {
        match self.count() {
            3.. => TriggerOutlook::ActiveLikely,
            2 => TriggerOutlook::PotentialPresent,
            _ => TriggerOutlook::NoneYet,
        }
    }

    /// Combine with storm readiness for a one-line display summary
    #[must_use]
    pub fn summary(&self, obs: &WeatherObservation, season: Season) -> String {
        let readiness = readiness_level(obs, season);
        let urgency = match (readiness, self.outlook()) {
            (ReadinessLevel::High, TriggerOutlook::ActiveLikely) => {
                "storms imminent or ongoing nearby"
            }
            (ReadinessLevel::High, _) => "loaded environment awaiting a trigger",
            (_, TriggerOutlook::ActiveLikely) => "trigger active but energy is limited",
            _ => "no immediate concern",
        };
        format!("{} readiness, {}: {}", readiness, self.outlook(), urgency)
    }
}

/// Evaluate trigger signals across an ordered hourly sequence.
///
/// Returns one signal per consecutive pair, so the output is one shorter
/// than the input; fewer than two hours yield no signals.
#[must_use]
pub fn assess_sequence(hours: &[WeatherObservation]) -> Vec<TriggerSignal> {
    hours
        .windows(2)
        .map(|pair| TriggerSignal::evaluate(&pair[0], &pair[1]))
        .collect()
}

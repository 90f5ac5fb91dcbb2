//! Batch assessment of an hourly forecast sequence
//!
//! The acquisition collaborator hands over a short ordered run of hourly
//! observations (typically the next 12 hours). This module scores every hour
//! in parallel, evaluates trigger signals between consecutive hours, and
//! surfaces the peak-risk hour for the display collaborator.

use crate::core_types::WeatherObservation;
use crate::scoring::profile::ScoringProfile;
use crate::scoring::risk::{score, RiskScore};
use crate::scoring::trigger::{assess_sequence, TriggerSignal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scores and trigger signals for one forecast run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlookAssessment {
    /// One risk score per forecast hour, in input order
    pub scores: Vec<RiskScore>,
    /// One trigger signal per consecutive hour pair (one shorter than
    /// `scores`; empty for runs under two hours)
    pub triggers: Vec<TriggerSignal>,
    /// Index of the highest-scoring hour (first on ties); `None` for an
    /// empty run
    pub peak_hour: Option<usize>,
}

impl OutlookAssessment {
    /// The highest risk score of the run, if any
    #[must_use]
    pub fn peak_score(&self) -> Option<&RiskScore> {
        self.peak_hour.map(|i| &self.scores[i])
    }
}

/// Score every hour of a forecast run against one profile.
///
/// Hours are independent, so scoring is data-parallel; output order matches
/// input order.
#[must_use]
pub fn score_hours(hours: &[WeatherObservation], profile: ScoringProfile) -> Vec<RiskScore> {
    hours.par_iter().map(|obs| score(obs, profile)).collect()
}

/// Score a forecast run and attach trigger signals and the peak hour.
///
/// # Example
/// ```
/// use storm_risk_core::core_types::WeatherObservation;
/// use storm_risk_core::outlook::assess;
/// use storm_risk_core::scoring::ScoringProfile;
///
/// let calm = WeatherObservation::default();
/// let active = WeatherObservation::from_raw(3200.0, -20.0, 50.0, 0.5, 85.0, 68.0, 35.0, 120.0);
/// let run = [calm, active, calm];
///
/// let outlook = assess(&run, ScoringProfile::Baseline);
/// assert_eq!(outlook.peak_hour, Some(1));
/// assert_eq!(outlook.triggers.len(), 2);
/// ```
#[must_use]
pub fn assess(hours: &[WeatherObservation], profile: ScoringProfile) -> OutlookAssessment {
    let scores = score_hours(hours, profile);
    let triggers = assess_sequence(hours);

    let peak_hour = scores
        .iter()
        .enumerate()
        .max_by(|(ia, a), (ib, b)| a.score.cmp(&b.score).then(ib.cmp(ia)))
        .map(|(i, _)| i);

    if let Some(i) = peak_hour {
        debug!(
            peak_hour = i,
            peak_score = scores[i].score,
            hours = hours.len(),
            "assessed forecast run"
        );
    }

    OutlookAssessment {
        scores,
        triggers,
        peak_hour,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm() -> WeatherObservation {
        WeatherObservation::default()
    }

    fn severe() -> WeatherObservation {
        WeatherObservation::from_raw(3200.0, -20.0, 50.0, 0.5, 85.0, 68.0, 35.0, 120.0)
    }

    #[test]
    fn scores_match_input_order() {
        let run = [calm(), severe(), calm()];
        let scores = score_hours(&run, ScoringProfile::Baseline);

        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0].score, 10);
        assert_eq!(scores[1].score, 75);
        assert_eq!(scores[2].score, 10);
    }

    #[test]
    fn peak_hour_is_the_maximum_and_first_on_ties() {
        let run = [calm(), severe(), severe(), calm()];
        let outlook = assess(&run, ScoringProfile::Baseline);

        assert_eq!(outlook.peak_hour, Some(1));
        assert_eq!(outlook.peak_score().map(|s| s.score), Some(75));
    }

    #[test]
    fn empty_run_has_no_peak() {
        let outlook = assess(&[], ScoringProfile::Baseline);
        assert!(outlook.scores.is_empty());
        assert!(outlook.triggers.is_empty());
        assert_eq!(outlook.peak_hour, None);
        assert!(outlook.peak_score().is_none());
    }

    #[test]
    fn single_hour_scores_but_has_no_triggers() {
        let outlook = assess(&[severe()], ScoringProfile::Baseline);
        assert_eq!(outlook.scores.len(), 1);
        assert!(outlook.triggers.is_empty());
        assert_eq!(outlook.peak_hour, Some(0));
    }

    #[test]
    fn parallel_batch_agrees_with_sequential_scoring() {
        let run: Vec<WeatherObservation> = (0..48)
            .map(|i| {
                let cape = (i as f32) * 100.0;
                WeatherObservation::from_raw(cape, -30.0, 40.0, 0.2, 75.0, 63.0, 25.0, 90.0)
            })
            .collect();

        let parallel = score_hours(&run, ScoringProfile::Baseline);
        for (obs, batch) in run.iter().zip(&parallel) {
            assert_eq!(batch, &score(obs, ScoringProfile::Baseline));
        }
    }
}

//! Validation Test Suite for the Severe Weather Risk Scorer
//!
//! End-to-end tests exercising the full point table, the seasonal profiles,
//! and the auxiliary heuristics against the documented worked examples and
//! invariants.
//!
//! Run tests with: cargo test --test `severe_weather_validation`

use approx::assert_relative_eq;
use storm_risk_core::core_types::units::JoulesPerKilogram;
use storm_risk_core::scoring::{risk_ranges, TriggerOutlook};
use storm_risk_core::{
    assess, readiness_level, score, storm_readiness, ReadinessLevel, RiskCategory, ScoringProfile,
    Season, WeatherObservation,
};

#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 1: Worked examples from the canonical point table
// ═══════════════════════════════════════════════════════════════════════════════

/// The documented end-to-end example:
/// CAPE 3200 (+30), gust 50 (+15), precip 0.5 (+10), 85%/68°F (+10),
/// CIN -20 (dead zone, +0), shear 35 (+5), SRH 120 (+5) = 75.
#[test]
fn worked_example_totals_75() {
    let obs = WeatherObservation::from_raw(3200.0, -20.0, 50.0, 0.5, 85.0, 68.0, 35.0, 120.0);
    let risk = score(&obs, ScoringProfile::Baseline);

    assert_eq!(risk.score, 75, "worked example must total 75: {risk}");
    assert!(!risk.capped);
    assert_eq!(risk.category(), RiskCategory::Moderate);
}

/// An all-zero record earns only the uncapped-CIN bonus.
#[test]
fn quiet_environment_scores_10() {
    let risk = score(&WeatherObservation::default(), ScoringProfile::Baseline);
    assert_eq!(risk.score, 10);
    assert_eq!(risk.category(), RiskCategory::Low);
}

/// Every category maxed sums past 100 internally and returns exactly 100.
#[test]
fn outbreak_environment_clamps_to_100() {
    let obs = WeatherObservation::from_raw(6000.0, 0.0, 90.0, 2.5, 98.0, 78.0, 60.0, 400.0);
    let risk = score(&obs, ScoringProfile::Baseline);

    assert_eq!(risk.score, 100);
    assert!(risk.capped, "raw sum above 100 must set the capped flag");
    assert_eq!(risk.category(), RiskCategory::High);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 2: Invariants over the full input space
// ═══════════════════════════════════════════════════════════════════════════════

/// Score stays within [0, 100] across a sweep of hostile inputs.
#[test]
fn score_is_always_bounded() {
    let extremes = [0.0, 0.009, 0.3, 1.0, 45.0, 60.0, 100.0, 3000.0, 1.0e9];
    for &a in &extremes {
        for &b in &extremes {
            let obs = WeatherObservation::from_raw(a, -b, b, a.min(10.0), 55.0, 62.0, b, a);
            for profile in [
                ScoringProfile::Baseline,
                ScoringProfile::Seasonal(Season::Spring),
                ScoringProfile::Seasonal(Season::Summer),
                ScoringProfile::Seasonal(Season::Fall),
                ScoringProfile::Seasonal(Season::Winter),
            ] {
                let risk = score(&obs, profile);
                assert!(
                    risk.score <= 100,
                    "score {} out of bounds for cape={a} cin=-{b}",
                    risk.score
                );
            }
        }
    }
}

/// Increasing CAPE alone never lowers the score, under every profile.
#[test]
fn cape_monotonicity_holds_for_all_profiles() {
    let profiles = [
        ScoringProfile::Baseline,
        ScoringProfile::Seasonal(Season::Spring),
        ScoringProfile::Seasonal(Season::Summer),
        ScoringProfile::Seasonal(Season::Fall),
    ];
    for profile in profiles {
        let mut previous = 0;
        for step in 0..60u16 {
            let cape = f32::from(step) * 100.0;
            let obs = WeatherObservation::from_raw(cape, -30.0, 50.0, 0.5, 85.0, 68.0, 35.0, 120.0);
            let current = score(&obs, profile).score;
            assert!(
                current >= previous,
                "score fell from {previous} to {current} at CAPE {cape} under {profile:?}"
            );
            previous = current;
        }
    }
}

/// Risk category ranges tile [0, 100] with no gaps or overlaps.
#[test]
fn risk_ranges_tile_the_score_space() {
    assert_eq!(risk_ranges::LOW.end, risk_ranges::MARGINAL.start);
    assert_eq!(risk_ranges::MARGINAL.end, risk_ranges::SLIGHT.start);
    assert_eq!(risk_ranges::SLIGHT.end, risk_ranges::ENHANCED.start);
    assert_eq!(risk_ranges::ENHANCED.end, risk_ranges::MODERATE.start);
    assert_eq!(risk_ranges::MODERATE.end, risk_ranges::HIGH.start);
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 3: Seasonal profile behavior
// ═══════════════════════════════════════════════════════════════════════════════

/// The same environment reads differently by season: a 3200 J/kg airmass is
/// top-tier in spring but mid-tier in summer, while spring weights the
/// kinematic fields more heavily.
#[test]
fn seasonal_profiles_reparameterize_cape_shear_srh() {
    let obs = WeatherObservation::from_raw(3200.0, -20.0, 50.0, 0.5, 85.0, 68.0, 35.0, 160.0);

    let baseline = score(&obs, ScoringProfile::Baseline).score;
    let spring = score(&obs, ScoringProfile::Seasonal(Season::Spring)).score;
    let summer = score(&obs, ScoringProfile::Seasonal(Season::Summer)).score;
    let winter = score(&obs, ScoringProfile::Seasonal(Season::Winter)).score;

    // Baseline: 30 + 15 + 10 + 10 + 5 + 10 = 80
    assert_eq!(baseline, 80);
    // Spring: same CAPE tier, shear 35 -> +15, SRH 160 -> +8 = 88
    assert_eq!(spring, 88);
    // Summer: CAPE drops a tier (-10), shear 35 -> +5, SRH 160 -> +5 = 65
    assert_eq!(summer, 65);
    // Winter has no tuning of its own
    assert_eq!(winter, baseline);

    assert!(summer < baseline, "summer discounts baseline-grade CAPE");
    assert!(spring > baseline, "spring rewards organized kinematics");
}

/// Gust, precipitation, moisture and CIN tiers are season-invariant.
#[test]
fn non_reparameterized_factors_score_identically_across_seasons() {
    // No CAPE, shear or SRH: only season-invariant factors can fire
    let obs = WeatherObservation::from_raw(0.0, -120.0, 61.0, 1.2, 85.0, 68.0, 0.0, 0.0);

    let baseline = score(&obs, ScoringProfile::Baseline);
    for season in [Season::Spring, Season::Summer, Season::Fall, Season::Winter] {
        let seasonal = score(&obs, ScoringProfile::Seasonal(season));
        assert_eq!(
            seasonal.score, baseline.score,
            "season-invariant factors diverged in {season:?}"
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TEST 4: Auxiliary heuristics (readiness + trigger)
// ═══════════════════════════════════════════════════════════════════════════════

/// Readiness is the net energy after the cap, bucketed per season.
#[test]
fn readiness_tracks_net_energy() {
    let obs = WeatherObservation::from_raw(2500.0, -400.0, 0.0, 0.0, 60.0, 60.0, 0.0, 0.0);

    assert_relative_eq!(*storm_readiness(&obs), 2100.0);
    assert_eq!(readiness_level(&obs, Season::Spring), ReadinessLevel::High);
    assert_eq!(
        readiness_level(&obs, Season::Summer),
        ReadinessLevel::Moderate
    );

    let strongly_capped =
        WeatherObservation::from_raw(800.0, -900.0, 0.0, 0.0, 60.0, 60.0, 0.0, 0.0);
    assert_eq!(
        storm_readiness(&strongly_capped),
        JoulesPerKilogram::new(-100.0)
    );
    assert_eq!(
        readiness_level(&strongly_capped, Season::Spring),
        ReadinessLevel::Low
    );
}

/// A destabilizing forecast run: the cap erodes, moisture surges, shear
/// ramps up and rain arrives — the trigger outlook escalates while the peak
/// risk lands on the most volatile hour.
#[test]
fn destabilizing_run_escalates_trigger_and_peak() {
    let run = [
        WeatherObservation::from_raw(1800.0, -120.0, 25.0, 0.0, 65.0, 60.0, 20.0, 50.0),
        WeatherObservation::from_raw(2400.0, -70.0, 35.0, 0.0, 72.0, 63.0, 26.0, 80.0),
        WeatherObservation::from_raw(3100.0, -25.0, 48.0, 0.05, 80.0, 66.5, 32.0, 130.0),
        WeatherObservation::from_raw(3600.0, 0.0, 62.0, 0.8, 88.0, 70.0, 41.0, 180.0),
    ];

    let outlook = assess(&run, ScoringProfile::Baseline);

    assert_eq!(outlook.scores.len(), 4);
    assert_eq!(outlook.triggers.len(), 3);
    assert_eq!(outlook.peak_hour, Some(3), "the uncapped hour is the peak");

    // Hour 0 -> 1: cap weakens and dewpoint surges, shear still under 30
    assert_eq!(
        outlook.triggers[0].outlook(),
        TriggerOutlook::PotentialPresent
    );
    // Hour 2 -> 3: cap gone, moisture surging, shear over the floor, rain
    // already falling
    assert_eq!(outlook.triggers[2].count(), 4);
    assert_eq!(outlook.triggers[2].outlook(), TriggerOutlook::ActiveLikely);

    // Scores climb with the destabilization
    let values: Vec<u8> = outlook.scores.iter().map(|s| s.score).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "scores: {values:?}");

    // The display summary for the final pair reflects a loaded environment
    let summary = outlook.triggers[2].summary(&run[3], Season::Spring);
    assert!(summary.contains("High readiness"), "summary: {summary}");
}

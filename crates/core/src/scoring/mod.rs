//! Severe convective weather heuristics
//!
//! This module holds the deterministic scoring engine and its two auxiliary
//! indicators:
//! - A tiered additive risk score over one observation ([`risk`])
//! - Storm readiness, the net energy surviving the cap ([`readiness`])
//! - Trigger-mechanism signals over consecutive hours ([`trigger`])
//!
//! # Background
//!
//! The score follows the ingredients-based view of severe convection:
//! instability (CAPE), a cap to overcome (CIN), moisture (humidity and
//! dewpoint), and organization (bulk shear, storm-relative helicity), with
//! surface gusts and ongoing precipitation as directly hazardous weather.
//!
//! # References
//!
//! - Johns, R.H. & Doswell, C.A. (1992). "Severe local storms forecasting."
//!   Weather and Forecasting, 7(4), 588-612.
//! - Rasmussen, E.N. & Blanchard, D.O. (1998). "A baseline climatology of
//!   sounding-derived supercell and tornado forecast parameters."

pub mod profile;
pub mod readiness;
pub mod risk;
pub mod trigger;

pub use profile::{MoistureTier, PointTable, ScoringProfile, Tier};
pub use readiness::{readiness_level, storm_readiness, ReadinessLevel, ReadinessThresholds};
pub use risk::{risk_ranges, score, Factor, FiredRule, RiskCategory, RiskScore};
pub use trigger::{assess_sequence, TriggerOutlook, TriggerSignal};

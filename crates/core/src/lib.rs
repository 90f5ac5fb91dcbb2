//! Storm Risk Core Library
//!
//! A deterministic severe convective weather risk scoring engine. Converts
//! normalized hourly observations (CAPE, CIN, wind gusts, precipitation,
//! humidity/dewpoint, bulk shear, storm-relative helicity) into a bounded
//! 0-100 risk score with a human-readable rationale, plus two auxiliary
//! indicators: storm readiness and trigger-mechanism signals.
//!
//! The crate is pure computation over already-fetched in-memory data: no
//! I/O, no shared mutable state, no error conditions. Geocoding, forecast
//! APIs and rendering live in external collaborators.

// Core types and units
pub mod core_types;

// Scoring engine and auxiliary heuristics
pub mod scoring;

// Batch assessment of hourly forecast runs
pub mod outlook;

// Re-export core types
pub use core_types::{Season, WeatherObservation};

// Re-export the scoring surface
pub use scoring::{
    readiness_level, score, storm_readiness, ReadinessLevel, RiskCategory, RiskScore,
    ScoringProfile, TriggerOutlook, TriggerSignal,
};

// Re-export batch assessment
pub use outlook::{assess, score_hours, OutlookAssessment};

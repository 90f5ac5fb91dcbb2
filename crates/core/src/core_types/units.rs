//! Semantic unit types for type-safe meteorological quantity handling
//!
//! This module provides newtype wrappers for the atmospheric quantities the
//! risk scorer consumes, preventing accidental mixing of incompatible units
//! (e.g. a dewpoint in °F with a relative humidity in %, or a wind gust in
//! mph with storm-relative helicity in m²/s²).
//!
//! # Design Philosophy
//! - All types wrap f32; scoring thresholds are coarse and do not need f64
//! - Implements common traits (Add, Sub, Mul, Div, Ord, Display, etc.)
//! - Total ordering via Ord trait (NaN handled via `total_cmp`)
//! - Private inner fields with validated constructors
//! - Serde support for serialization
//!
//! # Usage
//! ```
//! use storm_risk_core::core_types::units::{JoulesPerKilogram, MilesPerHour};
//!
//! let cape = JoulesPerKilogram::new(2500.0);
//! let gust = MilesPerHour::new(52.0);
//! assert!(cape > JoulesPerKilogram::new(2000.0));
//! assert_eq!(*gust, 52.0);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, DerefMut, Div, Mul, Neg, Sub};

/// Compare f32 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f32_total_cmp(a: f32, b: f32) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// ENERGY PER MASS (CAPE / CIN)
// ============================================================================

/// Specific energy in joules per kilogram.
///
/// Used for both CAPE (Convective Available Potential Energy, non-negative)
/// and CIN (Convective Inhibition, zero or negative; more negative means a
/// stronger suppressing cap). The sign carries meaning, so no non-negativity
/// invariant is enforced here — callers that require CAPE semantics clamp at
/// the observation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct JoulesPerKilogram(f32);

impl Eq for JoulesPerKilogram {}

impl PartialOrd for JoulesPerKilogram {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JoulesPerKilogram {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for JoulesPerKilogram {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl DerefMut for JoulesPerKilogram {
    #[inline]
    fn deref_mut(&mut self) -> &mut f32 {
        &mut self.0
    }
}

impl JoulesPerKilogram {
    /// Zero specific energy (no instability, no cap)
    pub const ZERO: JoulesPerKilogram = JoulesPerKilogram(0.0);

    /// Create a new specific energy value (any sign)
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        JoulesPerKilogram(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Absolute magnitude, e.g. cap strength from a negative CIN
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        JoulesPerKilogram(self.0.abs())
    }

    /// Clamp to non-negative, for quantities with CAPE semantics
    #[inline]
    #[must_use]
    pub fn max_zero(self) -> Self {
        JoulesPerKilogram(self.0.max(0.0))
    }
}

impl From<f32> for JoulesPerKilogram {
    fn from(v: f32) -> Self {
        JoulesPerKilogram(v)
    }
}

impl From<JoulesPerKilogram> for f32 {
    fn from(j: JoulesPerKilogram) -> f32 {
        j.0
    }
}

impl Neg for JoulesPerKilogram {
    type Output = JoulesPerKilogram;
    fn neg(self) -> JoulesPerKilogram {
        JoulesPerKilogram(-self.0)
    }
}

impl Add for JoulesPerKilogram {
    type Output = JoulesPerKilogram;
    fn add(self, rhs: JoulesPerKilogram) -> JoulesPerKilogram {
        JoulesPerKilogram(self.0 + rhs.0)
    }
}

impl Sub for JoulesPerKilogram {
    type Output = JoulesPerKilogram;
    fn sub(self, rhs: JoulesPerKilogram) -> JoulesPerKilogram {
        JoulesPerKilogram(self.0 - rhs.0)
    }
}

impl Mul<f32> for JoulesPerKilogram {
    type Output = JoulesPerKilogram;
    fn mul(self, rhs: f32) -> JoulesPerKilogram {
        JoulesPerKilogram(self.0 * rhs)
    }
}

impl Div<f32> for JoulesPerKilogram {
    type Output = JoulesPerKilogram;
    fn div(self, rhs: f32) -> JoulesPerKilogram {
        JoulesPerKilogram(self.0 / rhs)
    }
}

impl fmt::Display for JoulesPerKilogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} J/kg", self.0)
    }
}

// ============================================================================
// VELOCITY (WIND GUSTS / BULK SHEAR)
// ============================================================================

/// Velocity in miles per hour
///
/// Used for surface wind gusts and 0-6 km bulk shear magnitude, both of which
/// the data-acquisition collaborator normalizes to mph before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MilesPerHour(f32);

impl Eq for MilesPerHour {}

impl PartialOrd for MilesPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MilesPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for MilesPerHour {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl DerefMut for MilesPerHour {
    #[inline]
    fn deref_mut(&mut self) -> &mut f32 {
        &mut self.0
    }
}

impl MilesPerHour {
    /// Calm air
    pub const CALM: MilesPerHour = MilesPerHour(0.0);

    /// Create a new speed in mph. Asserts value >= 0 (speed magnitude).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f32) -> Self {
        assert!(value >= 0.0, "MilesPerHour::new: negative speed is invalid");
        MilesPerHour(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative speed magnitude).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f32) -> Self {
        MilesPerHour(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Convert to km/h
    #[inline]
    #[must_use]
    pub fn to_kmh(self) -> f32 {
        self.0 * 1.609_344
    }
}

impl From<f32> for MilesPerHour {
    fn from(v: f32) -> Self {
        MilesPerHour(v.max(0.0))
    }
}

impl From<MilesPerHour> for f32 {
    fn from(v: MilesPerHour) -> f32 {
        v.0
    }
}

impl Add for MilesPerHour {
    type Output = MilesPerHour;
    fn add(self, rhs: MilesPerHour) -> MilesPerHour {
        MilesPerHour(self.0 + rhs.0)
    }
}

impl Sub for MilesPerHour {
    type Output = MilesPerHour;
    fn sub(self, rhs: MilesPerHour) -> MilesPerHour {
        // Clamped at 0, speed is a magnitude
        MilesPerHour((self.0 - rhs.0).max(0.0))
    }
}

impl Mul<f32> for MilesPerHour {
    type Output = MilesPerHour;
    fn mul(self, rhs: f32) -> MilesPerHour {
        MilesPerHour(self.0 * rhs)
    }
}

impl fmt::Display for MilesPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mph", self.0)
    }
}

// ============================================================================
// PRECIPITATION DEPTH
// ============================================================================

/// Precipitation depth (or hourly intensity) in inches
///
/// The scorer treats the value as inches accumulated over the forecast hour;
/// providers reporting in/hr map 1:1 for hourly records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Inches(f32);

impl Eq for Inches {}

impl PartialOrd for Inches {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Inches {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Inches {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl DerefMut for Inches {
    #[inline]
    fn deref_mut(&mut self) -> &mut f32 {
        &mut self.0
    }
}

impl Inches {
    /// No precipitation
    pub const NONE: Inches = Inches(0.0);

    /// Smallest depth a standard rain gauge resolves
    pub const MEASURABLE: Inches = Inches(0.01);

    /// Create a new depth in inches. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f32) -> Self {
        assert!(value >= 0.0, "Inches::new: negative depth is invalid");
        Inches(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative depth).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f32) -> Self {
        Inches(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Convert to millimeters
    #[inline]
    #[must_use]
    pub fn to_millimeters(self) -> f32 {
        self.0 * 25.4
    }
}

impl From<f32> for Inches {
    fn from(v: f32) -> Self {
        Inches(v.max(0.0))
    }
}

impl From<Inches> for f32 {
    fn from(d: Inches) -> f32 {
        d.0
    }
}

impl Add for Inches {
    type Output = Inches;
    fn add(self, rhs: Inches) -> Inches {
        Inches(self.0 + rhs.0)
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} in", self.0)
    }
}

// ============================================================================
// RELATIVE HUMIDITY
// ============================================================================

/// Relative humidity as a percentage in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Percent(f32);

impl Eq for Percent {}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percent {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Percent {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl DerefMut for Percent {
    #[inline]
    fn deref_mut(&mut self) -> &mut f32 {
        &mut self.0
    }
}

impl Percent {
    /// Completely dry air
    pub const DRY: Percent = Percent(0.0);

    /// Saturated air
    pub const SATURATED: Percent = Percent(100.0);

    /// Create a new percentage. Asserts value in [0, 100].
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f32) -> Self {
        assert!(value >= 0.0, "Percent::new: value below 0");
        assert!(value <= 100.0, "Percent::new: value above 100");
        Percent(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value is within [0, 100].
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f32) -> Self {
        Percent(value)
    }

    /// Create from an unvalidated provider value, clamping into [0, 100]
    #[inline]
    #[must_use]
    pub fn clamped(value: f32) -> Self {
        Percent(value.clamp(0.0, 100.0))
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// As a fraction in [0, 1]
    #[inline]
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl From<Percent> for f32 {
    fn from(p: Percent) -> f32 {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Temperature in degrees Fahrenheit
///
/// Used for the surface dewpoint; the acquisition collaborator converts
/// provider output to °F before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Fahrenheit(f32);

impl Eq for Fahrenheit {}

impl PartialOrd for Fahrenheit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fahrenheit {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Fahrenheit {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl DerefMut for Fahrenheit {
    #[inline]
    fn deref_mut(&mut self) -> &mut f32 {
        &mut self.0
    }
}

impl Fahrenheit {
    /// Absolute zero in Fahrenheit
    pub const ABSOLUTE_ZERO: Fahrenheit = Fahrenheit(-459.67);

    /// Water freezing point
    pub const FREEZING: Fahrenheit = Fahrenheit(32.0);

    /// Create a new Fahrenheit temperature. Asserts value >= absolute zero.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f32) -> Self {
        assert!(
            value >= -459.67,
            "Fahrenheit::new: value is below absolute zero (-459.67°F)"
        );
        Fahrenheit(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= -459.67 (absolute zero).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f32) -> Self {
        Fahrenheit(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Convert to Celsius
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> f32 {
        (self.0 - 32.0) * 5.0 / 9.0
    }
}

impl From<f32> for Fahrenheit {
    fn from(v: f32) -> Self {
        Fahrenheit(v)
    }
}

impl From<Fahrenheit> for f32 {
    fn from(t: Fahrenheit) -> f32 {
        t.0
    }
}

// Fahrenheit - Fahrenheit = degree delta (plain f32, sign carries direction)
impl Sub for Fahrenheit {
    type Output = f32;
    fn sub(self, rhs: Fahrenheit) -> f32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Fahrenheit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°F", self.0)
    }
}

// ============================================================================
// STORM-RELATIVE HELICITY
// ============================================================================

/// Storm-relative helicity in m²/s²
///
/// A measure of streamwise rotational potential in the low-level inflow,
/// relevant to supercell and tornado risk.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SquareMetersPerSecondSquared(f32);

impl Eq for SquareMetersPerSecondSquared {}

impl PartialOrd for SquareMetersPerSecondSquared {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SquareMetersPerSecondSquared {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for SquareMetersPerSecondSquared {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl DerefMut for SquareMetersPerSecondSquared {
    #[inline]
    fn deref_mut(&mut self) -> &mut f32 {
        &mut self.0
    }
}

impl SquareMetersPerSecondSquared {
    /// No helicity (quiescent or unavailable)
    pub const ZERO: SquareMetersPerSecondSquared = SquareMetersPerSecondSquared(0.0);

    /// Create a new helicity value. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f32) -> Self {
        assert!(
            value >= 0.0,
            "SquareMetersPerSecondSquared::new: negative helicity is invalid"
        );
        SquareMetersPerSecondSquared(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative helicity).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f32) -> Self {
        SquareMetersPerSecondSquared(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for SquareMetersPerSecondSquared {
    fn from(v: f32) -> Self {
        SquareMetersPerSecondSquared(v.max(0.0))
    }
}

impl From<SquareMetersPerSecondSquared> for f32 {
    fn from(h: SquareMetersPerSecondSquared) -> f32 {
        h.0
    }
}

impl fmt::Display for SquareMetersPerSecondSquared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} m²/s²", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joules_per_kilogram_sign_semantics() {
        let cape = JoulesPerKilogram::new(3200.0);
        let cin = JoulesPerKilogram::new(-120.0);

        assert_eq!(cin.abs(), JoulesPerKilogram::new(120.0));
        assert_eq!(cin.max_zero(), JoulesPerKilogram::ZERO);
        assert_eq!((cape - cin.abs()).value(), 3080.0);
    }

    #[test]
    fn percent_clamped_sanitizes_provider_values() {
        assert_eq!(Percent::clamped(105.0), Percent::SATURATED);
        assert_eq!(Percent::clamped(-3.0), Percent::DRY);
        assert_eq!(Percent::clamped(62.5).value(), 62.5);
    }

    #[test]
    fn speed_subtraction_clamps_at_zero() {
        let a = MilesPerHour::new(20.0);
        let b = MilesPerHour::new(35.0);
        assert_eq!(a - b, MilesPerHour::CALM);
    }

    #[test]
    fn ordering_is_total() {
        let mut gusts = [
            MilesPerHour::new(60.0),
            MilesPerHour::new(12.0),
            MilesPerHour::new(45.0),
        ];
        gusts.sort();
        assert_eq!(gusts[0], MilesPerHour::new(12.0));
        assert_eq!(gusts[2], MilesPerHour::new(60.0));
    }

    #[test]
    fn fahrenheit_delta_is_signed() {
        let rising = Fahrenheit::new(68.0) - Fahrenheit::new(64.0);
        let falling = Fahrenheit::new(60.0) - Fahrenheit::new(66.0);
        assert_eq!(rising, 4.0);
        assert_eq!(falling, -6.0);
    }
}

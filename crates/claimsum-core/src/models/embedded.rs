//! Embedded extraction profiles for standalone binary distribution.
//!
//! The built-in profiles are compiled into the binary so the tool works
//! without a configs directory; files on disk take precedence when found.

/// Embedded vehicle insurance profile.
pub static VEHICLE_PROFILE: &str = include_str!("../../../../configs/vehicle_insurance.json");

/// Embedded health insurance profile.
pub static HEALTH_PROFILE: &str = include_str!("../../../../configs/health_insurance.json");

/// Embedded life insurance profile.
pub static LIFE_PROFILE: &str = include_str!("../../../../configs/life_insurance.json");

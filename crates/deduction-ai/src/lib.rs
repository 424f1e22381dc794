//! Behavioral deduction engine.
//!
//! Maps observed behavioral and physical cues, adjusted for situational
//! context, to ranked subject profiles with confidence and threat labels,
//! and flags logically incongruent cue combinations.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

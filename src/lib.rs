//! starlog - stargazing observation log with achievements
//!
//! Observations are appended to a local SQLite log. Every report is derived
//! from a fresh snapshot of that log:
//!
//! 1. **Statistics**: totals, uniqueness sets, equipment usage, time-of-day
//!    buckets and daily streaks ([`stats::aggregate`]).
//! 2. **Achievements**: a static rule table, validated at startup, mapped onto
//!    those statistics to produce ranked progress
//!    ([`stats::AchievementEvaluator`]).

pub mod config;
pub mod domain;
pub mod stats;
pub mod store;

pub use domain::*;

//! Immutable inputs to one evaluation: the facts of a completed walk and
//! the landmark collaborator's counters.
//!
//! The walk-tracking collaborator reduces raw GPS samples into a
//! [`SessionFact`] when a walk ends; the engine never sees coordinates.
//! Each fact carries a fresh `session_id`, which the orchestrator uses as
//! an idempotency key so re-submitting the same walk is harmless.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Weather at walk time, as reported by the weather collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// Condition string: "sunny", "cloudy", "rainy", "snowy", "foggy".
    pub condition: String,
    pub temperature_c: f64,
}

/// The immutable record of one completed walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFact {
    /// Idempotency key, minted once per completed walk.
    pub session_id: Uuid,
    pub distance_km: f64,
    pub duration_secs: f64,
    /// Local wall-clock time the walk started.
    pub start_time: NaiveDateTime,
    pub average_speed_kmh: f64,
    pub weather: Option<Weather>,
    /// Restaurants passed without stopping.
    pub passed_restaurant_count: u32,
    /// Times the route looped near its starting point.
    pub home_loop_count: u32,
    /// Furthest straight-line distance from the start, km.
    pub max_distance_from_start_km: f64,
    /// Tight circles walked in place.
    pub spin_count: u32,
    /// Whether the route closed back on its own start.
    pub is_closed_loop: bool,
    /// Return-leg speed divided by outbound-leg speed.
    pub return_speed_ratio: f64,
}

impl SessionFact {
    /// Calendar day the walk belongs to, for streak purposes.
    pub fn start_day(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Local hour of day the walk started (0–23).
    pub fn start_hour(&self) -> u32 {
        self.start_time.time().hour()
    }
}

/// Snapshot of the landmark/POI collaborator's visit counters, queried by
/// the caller right before evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkCounts {
    /// Distinct parks visited so far.
    pub parks_visited: u32,
    /// Distinct landmarks of any kind visited so far.
    pub distinct_landmarks: u32,
    /// Most visits recorded at any single spot.
    pub max_same_spot_visits: u32,
}

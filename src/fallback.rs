//! # Calculated Tide Model
//!
//! When the tabuamare upstream is unreachable, the tides endpoint falls back
//! to this simplified semidiurnal model instead of failing the request. It
//! produces the four daily tide events (two high, two low) for a calendar
//! date from a pseudo-lunar cycle.
//!
//! ## Model Characteristics
//!
//! - **Lunar phase**: the day-of-year folded into a 29.5-day synodic month
//! - **Spring/neap envelope**: amplitude peaks near new/full moon via
//!   `|cos(phase · 2π)|`, scaling a 1.2 m base amplitude
//! - **Daily lag**: event times advance ~50 minutes per day
//!   (`day_of_year · 0.84 mod 24`), with successive events 6.2 h apart
//! - **Jitter**: tide heights carry one uniform random term, injected by the
//!   caller so tests can pin it; phase, amplitude and times are pure
//!   functions of the date
//!
//! ## Accuracy Trade-offs
//!
//! This is an availability fallback, not an oceanographic simulation. It has
//! the right period and spring-neap envelope but no station harmonics, no
//! high/low asymmetry and no meteorological effects. Responses built from it
//! carry `source: "calculated"` and a disclaimer so callers know they are
//! seeing an approximation.
//!
//! The model keeps no state and is safe to call concurrently.

use crate::{TideEvent, TideKind};
use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

/// Hours between successive tide events (~a quarter lunar day).
const EVENT_SPACING_HRS: f64 = 6.2;

/// Synodic lunar month in days.
const LUNAR_MONTH_DAYS: f64 = 29.5;

/// Generate the four tide events for `date`, drawing height jitter from the
/// process RNG.
pub fn approximate(date: NaiveDate) -> Vec<TideEvent> {
    approximate_with(date, rand::random::<f64>)
}

/// Generate the four tide events for `date` with an explicit jitter source.
///
/// `jitter` must yield uniform values in `[0, 1)`; it is drawn once per
/// event. Everything else is deterministic in `date`, so pinning the jitter
/// makes the output exactly reproducible.
///
/// Events are generated alternating high/low starting with high, then sorted
/// by time of day; heights are rounded to one decimal after the description
/// thresholds are applied.
pub fn approximate_with(date: NaiveDate, mut jitter: impl FnMut() -> f64) -> Vec<TideEvent> {
    let day_of_year = f64::from(date.ordinal());

    // Amplitude envelope from the synodic cycle, peaking at new/full moon
    let lunar_phase = (day_of_year % LUNAR_MONTH_DAYS) / LUNAR_MONTH_DAYS;
    let spring_tide_factor = (lunar_phase * 2.0 * PI).cos().abs();
    let amplitude = 1.2 * (0.7 + 0.6 * spring_tide_factor);

    // First event of the day, drifting ~50 minutes later each day
    let base_hour = (day_of_year * 0.84) % 24.0;

    let mut events = Vec::with_capacity(4);
    for i in 0..4u32 {
        let hour = (base_hour + f64::from(i) * EVENT_SPACING_HRS) % 24.0;
        let is_high = i % 2 == 0;

        let height = if is_high {
            1.5 + amplitude * (0.8 + 0.2 * jitter())
        } else {
            0.3 + 0.3 * jitter()
        };

        let description = if is_high {
            format!(
                "Maré alta - {}",
                if height > 2.0 {
                    "Maré de sizígia (lua cheia/nova)"
                } else {
                    "Maré normal"
                }
            )
        } else {
            format!(
                "Maré baixa - {}",
                if height < 0.4 {
                    "Boa para caminhada nos arrecifes"
                } else {
                    "Maré baixa normal"
                }
            )
        };

        let whole_hours = hour.floor();
        let minutes = ((hour - whole_hours) * 60.0).floor();

        events.push(TideEvent {
            time: format!("{:02}:{:02}", whole_hours as u32, minutes as u32),
            kind: if is_high { TideKind::High } else { TideKind::Low },
            height_m: (height * 10.0).round() / 10.0,
            description,
        });
    }

    // Same-day zero-padded HH:MM, so string order is chronological order
    events.sort_by(|a, b| a.time.cmp(&b.time));
    events
}

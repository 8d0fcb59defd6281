//! # Praiamar Core Library
//!
//! This library backs the praiamar HTTP service: a small, stateless JSON API
//! for beach weather and tide data on the Pernambuco coast.
//!
//! ## Request Pipeline
//!
//! Both endpoints run the same five stages:
//! 1. **Normalize**: user-supplied beach/city/port names become canonical
//!    slugs ([`slug`])
//! 2. **Resolve**: slugs are matched against static reference tables, exact
//!    first, then by substring ([`resolve`], [`stations`])
//! 3. **Fetch**: the resolved station keys an upstream call ([`cptec`] for
//!    wave forecasts, [`tabuamare`] for tide tables)
//! 4. **Fall back**: when the tide upstream is unavailable, a deterministic
//!    semidiurnal model synthesizes the tide table locally ([`fallback`]);
//!    the weather upstream degrades to a general forecast endpoint instead
//! 5. **Shape**: upstream payloads are renamed and enriched into the public
//!    JSON contract, including per-condition recommendations ([`report`])
//!
//! ## Statelessness
//!
//! The only process-wide data are the read-only reference tables in
//! [`stations`]. Everything else is synthesized per request and dropped with
//! the response, so requests can be served with arbitrary parallelism and no
//! locking.

use serde::{Deserialize, Serialize};

// Module declarations
pub mod config;
pub mod cptec;
pub mod error;
pub mod fallback;
pub mod report;
pub mod resolve;
pub mod routes;
pub mod slug;
pub mod state;
pub mod stations;
pub mod tabuamare;

/// Whether a tide event is a high or low water mark.
///
/// Serializes as lowercase `"high"` / `"low"`, which is the wire form the
/// tides endpoint emits under the `type` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TideKind {
    High,
    Low,
}

/// A single predicted tide event for one calendar date.
///
/// Produced by the calculated fallback model when the tide upstream is
/// unavailable. Times are local 24h `HH:MM` strings; zero-padding makes
/// lexicographic order equal to chronological order within a day, which the
/// model relies on when sorting.
///
/// # Example
/// ```
/// use praiamar_lib::{TideEvent, TideKind};
///
/// let event = TideEvent {
///     time: "06:00".to_string(),
///     kind: TideKind::High,
///     height_m: 2.3,
///     description: "Maré alta - Maré de sizígia (lua cheia/nova)".to_string(),
/// };
/// assert_eq!(event.time, "06:00");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TideEvent {
    /// Zero-padded `HH:MM`, 24h clock
    pub time: String,
    /// High or low water
    #[serde(rename = "type")]
    pub kind: TideKind,
    /// Height above chart datum in meters, rounded to one decimal
    pub height_m: f64,
    /// Human-readable note (Portuguese), e.g. spring-tide or reef-walking hints
    pub description: String,
}

//! Slug resolution against the static reference tables.
//!
//! Resolution is exact-match first. When that misses, a substring pass walks
//! the table in declaration order and the first hit wins: a cheap heuristic
//! for inputs like "boa viagem" against the key `praia-de-boa-viagem`, not a
//! ranked similarity search. Tables are passed in as parameters so tests can
//! substitute their own.
//!
//! Resolution failure is a normal outcome: callers answer it with the
//! documented "available options" listing, never an error.

use crate::stations::{City, Port};

/// Resolve a weather-domain beach slug to its city slug.
///
/// Fuzzy pass: the table key may contain the candidate, or the candidate may
/// contain the key with its `praia-de-` prefix removed (so "boa-viagem-sul"
/// still lands on `praia-de-boa-viagem`).
pub fn city_for_beach<'m>(mapping: &[(&'m str, &'m str)], slug: &str) -> Option<&'m str> {
    if let Some((_, city)) = mapping.iter().find(|(beach, _)| *beach == slug) {
        return Some(*city);
    }
    mapping.iter().find_map(|(beach, city)| {
        let bare = beach.strip_prefix("praia-de-").unwrap_or(*beach);
        (beach.contains(slug) || slug.contains(bare)).then_some(*city)
    })
}

/// Resolve a tide-domain beach slug to its reference port slug.
///
/// Fuzzy pass is symmetric: either string containing the other counts.
pub fn port_for_beach<'m>(mapping: &[(&'m str, &'m str)], slug: &str) -> Option<&'m str> {
    if let Some((_, port)) = mapping.iter().find(|(beach, _)| *beach == slug) {
        return Some(*port);
    }
    mapping
        .iter()
        .find_map(|(beach, port)| (slug.contains(beach) || beach.contains(slug)).then_some(*port))
}

/// Resolve a city slug or partial display name to a city entry.
///
/// Exact slug first, then the first city whose slug contains the candidate
/// or whose lowercased display name contains it ("jaboatao" matches
/// `jaboatao-dos-guararapes`).
pub fn city<'c>(cities: &'c [City], slug: &str) -> Option<&'c City> {
    if let Some(city) = cities.iter().find(|c| c.slug == slug) {
        return Some(city);
    }
    cities
        .iter()
        .find(|c| c.slug.contains(slug) || c.name.to_lowercase().contains(slug))
}

/// Resolve a port slug. Exact only; ports have no fuzzy pass.
pub fn port<'p>(ports: &'p [Port], slug: &str) -> Option<&'p Port> {
    ports.iter().find(|p| p.slug == slug)
}

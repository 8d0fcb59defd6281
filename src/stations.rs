//! Static reference tables for the Pernambuco coast.
//!
//! All lookups in this service resolve against the data here: three tide
//! reference ports, nine CPTEC city codes, and the beach-to-station mappings
//! for each domain. The tables are ordered slices rather than maps because
//! the fuzzy pass in [`crate::resolve`] is first-match-wins in declaration
//! order.
//!
//! Every mapping target must name an entry of the corresponding place table.
//! That is a compile-time data invariant, checked by tests, never at
//! runtime.

/// A tide reference port.
#[derive(Debug, Clone, Copy)]
pub struct Port {
    pub slug: &'static str,
    /// Display name, also the key the tabuamare API expects
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

/// A coastal city known to the CPTEC forecast service.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub slug: &'static str,
    /// CPTEC city code, used verbatim in BrasilAPI URLs
    pub code: u32,
    pub name: &'static str,
}

/// Tide reference ports, north to south.
pub const PORTS: &[Port] = &[
    Port {
        slug: "recife",
        name: "Porto do Recife",
        lat: -8.0639,
        lon: -34.8711,
    },
    Port {
        slug: "suape",
        name: "Porto de Suape",
        lat: -8.3847,
        lon: -34.9486,
    },
    Port {
        slug: "tamandare",
        name: "Tamandaré",
        lat: -8.7594,
        lon: -35.1033,
    },
];

/// Coastal cities with CPTEC codes.
pub const CITIES: &[City] = &[
    City {
        slug: "recife",
        code: 241,
        name: "Recife",
    },
    City {
        slug: "ipojuca",
        code: 1299,
        name: "Ipojuca",
    },
    City {
        slug: "cabo-de-santo-agostinho",
        code: 836,
        name: "Cabo de Santo Agostinho",
    },
    City {
        slug: "tamandare",
        code: 1374,
        name: "Tamandaré",
    },
    City {
        slug: "jaboatao-dos-guararapes",
        code: 1300,
        name: "Jaboatão dos Guararapes",
    },
    City {
        slug: "paulista",
        code: 1356,
        name: "Paulista",
    },
    City {
        slug: "igarassu",
        code: 1298,
        name: "Igarassu",
    },
    City {
        slug: "sirinhaem",
        code: 1373,
        name: "Sirinhaém",
    },
    City {
        slug: "itamaraca",
        code: 1301,
        name: "Ilha de Itamaracá",
    },
];

/// Beach to city mapping for the weather domain.
pub const BEACH_TO_CITY: &[(&str, &str)] = &[
    ("praia-de-boa-viagem", "recife"),
    ("praia-do-pina", "recife"),
    ("praia-de-brasilia-teimosa", "recife"),
    ("porto-de-galinhas", "ipojuca"),
    ("praia-de-maracaipe", "ipojuca"),
    ("praia-de-muro-alto", "ipojuca"),
    ("praia-de-serrambi", "ipojuca"),
    ("praia-dos-macacos", "ipojuca"),
    ("praia-de-calhetas", "cabo-de-santo-agostinho"),
    ("praia-de-gaibu", "cabo-de-santo-agostinho"),
    ("praia-de-suape", "cabo-de-santo-agostinho"),
    ("praia-do-paiva", "cabo-de-santo-agostinho"),
    ("praia-de-carneiros", "tamandare"),
    ("praia-de-tamandare", "tamandare"),
    ("praia-de-piedade", "jaboatao-dos-guararapes"),
    ("praia-de-candeias", "jaboatao-dos-guararapes"),
    ("praia-de-maria-farinha", "paulista"),
    ("coroa-do-aviao", "igarassu"),
    ("praia-de-guadalupe", "sirinhaem"),
    ("praia-de-itamaraca", "itamaraca"),
];

/// Beach to nearest reference port mapping for the tide domain.
///
/// Keys here are bare beach names; [`crate::slug::beach_slug`] strips the
/// `praia-de-` / `praia-do-` prefix before lookup.
pub const BEACH_TO_PORT: &[(&str, &str)] = &[
    ("boa-viagem", "recife"),
    ("pina", "recife"),
    ("brasilia-teimosa", "recife"),
    ("piedade", "recife"),
    ("candeias", "recife"),
    ("maria-farinha", "recife"),
    ("itamaraca", "recife"),
    ("coroa-do-aviao", "recife"),
    ("porto-de-galinhas", "suape"),
    ("maracaipe", "suape"),
    ("muro-alto", "suape"),
    ("serrambi", "suape"),
    ("calhetas", "suape"),
    ("gaibu", "suape"),
    ("paiva", "suape"),
    ("suape", "suape"),
    ("carneiros", "tamandare"),
    ("tamandare", "tamandare"),
    ("guadalupe", "tamandare"),
];

/// Look up a port by its exact slug.
pub fn port_by_slug(slug: &str) -> Option<&'static Port> {
    PORTS.iter().find(|p| p.slug == slug)
}

/// Look up a city by its exact slug.
pub fn city_by_slug(slug: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes_match_contract() {
        assert_eq!(PORTS.len(), 3);
        assert_eq!(CITIES.len(), 9);
        assert_eq!(BEACH_TO_CITY.len(), 20);
        assert_eq!(BEACH_TO_PORT.len(), 19);
    }

    #[test]
    fn every_beach_city_target_exists() {
        for (beach, city) in BEACH_TO_CITY {
            assert!(
                city_by_slug(city).is_some(),
                "beach {beach} maps to unknown city {city}"
            );
        }
    }

    #[test]
    fn every_beach_port_target_exists() {
        for (beach, port) in BEACH_TO_PORT {
            assert!(
                port_by_slug(port).is_some(),
                "beach {beach} maps to unknown port {port}"
            );
        }
    }

    #[test]
    fn slugs_are_already_canonical() {
        use crate::slug::slugify;

        for city in CITIES {
            assert_eq!(slugify(city.slug), city.slug);
        }
        for port in PORTS {
            assert_eq!(slugify(port.slug), port.slug);
        }
        for (beach, _) in BEACH_TO_CITY.iter().chain(BEACH_TO_PORT) {
            assert_eq!(slugify(beach), *beach);
        }
    }

    #[test]
    fn mapping_keys_are_unique() {
        for table in [BEACH_TO_CITY, BEACH_TO_PORT] {
            let mut keys: Vec<_> = table.iter().map(|(beach, _)| beach).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), table.len());
        }
    }
}

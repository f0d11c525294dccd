//! Geographic traffic model: country → region → city.
//!
//! Weights describe relative traffic share at each level and are normalized
//! at sampling time. Tech affinity is a per-city scalar in [0, 1] that biases
//! device recency and engagement upward.

/// Leaf of the geo tree.
#[derive(Debug, Clone)]
pub struct City {
    pub name: &'static str,
    pub weight: f64,
    pub tech_affinity: f64,
}

#[derive(Debug, Clone)]
pub struct Region {
    pub name: &'static str,
    pub weight: f64,
    pub cities: Vec<City>,
}

#[derive(Debug, Clone)]
pub struct Country {
    pub name: &'static str,
    pub weight: f64,
    /// UTC offsets in hours; one is picked uniformly per visitor.
    pub timezone_offsets: Vec<i32>,
    pub isps: Vec<&'static str>,
    pub regions: Vec<Region>,
}

fn city(name: &'static str, weight: f64, tech_affinity: f64) -> City {
    City {
        name,
        weight,
        tech_affinity,
    }
}

fn region(name: &'static str, weight: f64, cities: Vec<City>) -> Region {
    Region {
        name,
        weight,
        cities,
    }
}

/// The built-in location model covering the site's seven main markets.
pub fn default_countries() -> Vec<Country> {
    vec![
        Country {
            name: "United States",
            weight: 0.35,
            // PST, EST, CST, MST
            timezone_offsets: vec![-8, -5, -6, -7],
            isps: vec![
                "Comcast Cable",
                "Verizon Wireless",
                "AT&T Internet",
                "Charter Spectrum",
                "Cox Communications",
            ],
            regions: vec![
                region(
                    "California",
                    0.4,
                    vec![
                        city("Los Angeles", 0.4, 0.8),
                        city("San Francisco", 0.35, 0.95),
                        city("San Diego", 0.15, 0.7),
                        city("Sacramento", 0.1, 0.6),
                    ],
                ),
                region(
                    "New York",
                    0.25,
                    vec![
                        city("New York", 0.7, 0.85),
                        city("Buffalo", 0.2, 0.6),
                        city("Albany", 0.1, 0.65),
                    ],
                ),
                region(
                    "Texas",
                    0.2,
                    vec![
                        city("Houston", 0.4, 0.75),
                        city("Austin", 0.35, 0.9),
                        city("Dallas", 0.25, 0.8),
                    ],
                ),
                region(
                    "Washington",
                    0.15,
                    vec![city("Seattle", 0.8, 0.92), city("Spokane", 0.2, 0.65)],
                ),
            ],
        },
        Country {
            name: "United Kingdom",
            weight: 0.2,
            timezone_offsets: vec![0],
            isps: vec![
                "BT Broadband",
                "Sky Broadband",
                "Virgin Media",
                "TalkTalk",
                "Plusnet",
            ],
            regions: vec![
                region(
                    "England",
                    0.8,
                    vec![
                        city("London", 0.6, 0.88),
                        city("Manchester", 0.2, 0.75),
                        city("Birmingham", 0.15, 0.7),
                        city("Leeds", 0.05, 0.72),
                    ],
                ),
                region(
                    "Scotland",
                    0.15,
                    vec![city("Edinburgh", 0.6, 0.8), city("Glasgow", 0.4, 0.75)],
                ),
                region("Wales", 0.05, vec![city("Cardiff", 1.0, 0.7)]),
            ],
        },
        Country {
            name: "Germany",
            weight: 0.15,
            timezone_offsets: vec![1],
            isps: vec![
                "Deutsche Telekom",
                "Vodafone Germany",
                "1&1",
                "O2 Germany",
            ],
            regions: vec![
                region(
                    "Bavaria",
                    0.3,
                    vec![city("Munich", 0.7, 0.82), city("Nuremberg", 0.3, 0.75)],
                ),
                region(
                    "North Rhine-Westphalia",
                    0.35,
                    vec![
                        city("Cologne", 0.4, 0.78),
                        city("Düsseldorf", 0.35, 0.8),
                        city("Dortmund", 0.25, 0.72),
                    ],
                ),
                region("Berlin", 0.35, vec![city("Berlin", 1.0, 0.85)]),
            ],
        },
        Country {
            name: "Canada",
            weight: 0.1,
            timezone_offsets: vec![-8, -5, -6],
            isps: vec![
                "Bell Canada",
                "Rogers Communications",
                "Telus",
                "Shaw Communications",
            ],
            regions: vec![
                region(
                    "Ontario",
                    0.5,
                    vec![city("Toronto", 0.7, 0.83), city("Ottawa", 0.3, 0.78)],
                ),
                region(
                    "British Columbia",
                    0.3,
                    vec![city("Vancouver", 0.8, 0.85), city("Victoria", 0.2, 0.75)],
                ),
                region(
                    "Quebec",
                    0.2,
                    vec![city("Montreal", 0.8, 0.8), city("Quebec City", 0.2, 0.7)],
                ),
            ],
        },
        Country {
            name: "Australia",
            weight: 0.08,
            timezone_offsets: vec![10, 11],
            isps: vec!["Telstra", "Optus", "TPG", "Aussie Broadband"],
            regions: vec![
                region(
                    "New South Wales",
                    0.5,
                    vec![city("Sydney", 0.8, 0.84), city("Newcastle", 0.2, 0.72)],
                ),
                region(
                    "Victoria",
                    0.35,
                    vec![city("Melbourne", 0.9, 0.86), city("Geelong", 0.1, 0.7)],
                ),
                region(
                    "Queensland",
                    0.15,
                    vec![city("Brisbane", 0.7, 0.78), city("Gold Coast", 0.3, 0.73)],
                ),
            ],
        },
        Country {
            name: "France",
            weight: 0.07,
            timezone_offsets: vec![1],
            isps: vec!["Orange France", "Free", "SFR", "Bouygues Telecom"],
            regions: vec![
                region("Île-de-France", 0.6, vec![city("Paris", 1.0, 0.83)]),
                region(
                    "Provence-Alpes-Côte d'Azur",
                    0.25,
                    vec![city("Marseille", 0.6, 0.75), city("Nice", 0.4, 0.78)],
                ),
                region("Auvergne-Rhône-Alpes", 0.15, vec![city("Lyon", 1.0, 0.8)]),
            ],
        },
        Country {
            name: "Spain",
            weight: 0.05,
            timezone_offsets: vec![1],
            isps: vec!["Movistar", "Vodafone Spain", "Orange Spain", "MásMóvil"],
            regions: vec![
                region("Madrid", 0.4, vec![city("Madrid", 1.0, 0.8)]),
                region(
                    "Catalonia",
                    0.4,
                    vec![city("Barcelona", 0.8, 0.82), city("Girona", 0.2, 0.7)],
                ),
                region(
                    "Andalusia",
                    0.2,
                    vec![city("Seville", 0.5, 0.72), city("Málaga", 0.5, 0.75)],
                ),
            ],
        },
    ]
}

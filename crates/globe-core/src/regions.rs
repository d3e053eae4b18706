//! Static named regions and the grouping of stations into them.

use crate::catalog::{Station, StationId};
use crate::geo::GeoCoord;
use fnv::FnvHashSet;

pub struct RegionDefinition {
    pub name: &'static str,
    pub emoji: &'static str,
    pub countries: &'static [&'static str],
    pub center: GeoCoord,
    pub color: u32,
}

pub const OTHER_REGION: &str = "Other";
const OTHER_EMOJI: &str = "🌐";
const OTHER_COLOR: u32 = 0x858585;

pub const REGION_DEFINITIONS: [RegionDefinition; 11] = [
    RegionDefinition {
        name: "North America",
        emoji: "🌎",
        countries: &["United States", "Canada", "Mexico"],
        center: GeoCoord::new(45.0, -100.0),
        color: 0x4fc3f7,
    },
    RegionDefinition {
        name: "Central America",
        emoji: "🌎",
        countries: &[
            "Guatemala",
            "Honduras",
            "El Salvador",
            "Nicaragua",
            "Costa Rica",
            "Panama",
            "Belize",
        ],
        center: GeoCoord::new(15.0, -85.0),
        color: 0x4dd0e1,
    },
    RegionDefinition {
        name: "South America",
        emoji: "🌎",
        countries: &[
            "Brazil",
            "Argentina",
            "Colombia",
            "Chile",
            "Peru",
            "Venezuela",
            "Ecuador",
            "Bolivia",
            "Paraguay",
            "Uruguay",
        ],
        center: GeoCoord::new(-15.0, -60.0),
        color: 0x26c6da,
    },
    RegionDefinition {
        name: "Western Europe",
        emoji: "🌍",
        countries: &[
            "United Kingdom",
            "France",
            "Germany",
            "Spain",
            "Italy",
            "Netherlands",
            "Belgium",
            "Switzerland",
            "Austria",
            "Portugal",
            "Ireland",
            "Denmark",
            "Norway",
            "Sweden",
            "Finland",
        ],
        center: GeoCoord::new(50.0, 10.0),
        color: 0x26a69a,
    },
    RegionDefinition {
        name: "Eastern Europe",
        emoji: "🌍",
        countries: &[
            "Russia",
            "Poland",
            "Ukraine",
            "Romania",
            "Czech Republic",
            "Hungary",
            "Serbia",
            "Bulgaria",
            "Slovakia",
            "Croatia",
            "Bosnia and Herzegovina",
            "Slovenia",
            "Latvia",
            "Lithuania",
            "Estonia",
        ],
        center: GeoCoord::new(52.0, 30.0),
        color: 0x66bb6a,
    },
    RegionDefinition {
        name: "Middle East",
        emoji: "🌍",
        countries: &[
            "Turkey",
            "Iran",
            "Iraq",
            "Saudi Arabia",
            "Israel",
            "United Arab Emirates",
            "Jordan",
            "Lebanon",
            "Syria",
            "Kuwait",
            "Oman",
            "Qatar",
            "Bahrain",
        ],
        center: GeoCoord::new(29.0, 47.0),
        color: 0xffa726,
    },
    RegionDefinition {
        name: "Africa",
        emoji: "🌍",
        countries: &[
            "Egypt",
            "Morocco",
            "Algeria",
            "Tunisia",
            "Libya",
            "South Africa",
            "Nigeria",
            "Kenya",
            "Ethiopia",
            "Ghana",
            "Tanzania",
            "Uganda",
        ],
        center: GeoCoord::new(0.0, 20.0),
        color: 0xef5350,
    },
    RegionDefinition {
        name: "South Asia",
        emoji: "🌏",
        countries: &[
            "India",
            "Pakistan",
            "Bangladesh",
            "Sri Lanka",
            "Nepal",
            "Afghanistan",
        ],
        center: GeoCoord::new(23.0, 80.0),
        color: 0xec407a,
    },
    RegionDefinition {
        name: "East Asia",
        emoji: "🌏",
        countries: &["China", "Japan", "South Korea", "Taiwan", "Mongolia"],
        center: GeoCoord::new(35.0, 115.0),
        color: 0xab47bc,
    },
    RegionDefinition {
        name: "Southeast Asia",
        emoji: "🌏",
        countries: &[
            "Thailand",
            "Indonesia",
            "Philippines",
            "Vietnam",
            "Malaysia",
            "Singapore",
            "Myanmar",
            "Cambodia",
            "Laos",
        ],
        center: GeoCoord::new(10.0, 105.0),
        color: 0x7e57c2,
    },
    RegionDefinition {
        name: "Oceania",
        emoji: "🌏",
        countries: &["Australia", "New Zealand", "Papua New Guinea", "Fiji"],
        center: GeoCoord::new(-25.0, 140.0),
        color: 0x5c6bc0,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub name: String,
    pub emoji: String,
    pub color: u32,
    pub center: GeoCoord,
    pub station_ids: Vec<StationId>,
}

impl Region {
    fn empty(name: &str, emoji: &str, center: GeoCoord, color: u32) -> Self {
        Self {
            name: name.to_string(),
            emoji: emoji.to_string(),
            color,
            center,
            station_ids: Vec::new(),
        }
    }

    pub fn member_set(&self) -> FnvHashSet<StationId> {
        self.station_ids.iter().cloned().collect()
    }
}

/// Ordered region snapshot: definition order, with "Other" last when present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionTable {
    regions: Vec<Region>,
}

impl RegionTable {
    pub fn group(stations: &[Station]) -> Self {
        let mut regions: Vec<Region> = REGION_DEFINITIONS
            .iter()
            .map(|d| Region::empty(d.name, d.emoji, d.center, d.color))
            .collect();
        let mut other: Option<Region> = None;

        for station in stations {
            let mut assigned = false;
            for (def, region) in REGION_DEFINITIONS.iter().zip(regions.iter_mut()) {
                if def.countries.contains(&station.country.as_str()) {
                    region.station_ids.push(station.id.clone());
                    assigned = true;
                }
            }
            if !assigned {
                other
                    .get_or_insert_with(|| {
                        Region::empty(OTHER_REGION, OTHER_EMOJI, GeoCoord::default(), OTHER_COLOR)
                    })
                    .station_ids
                    .push(station.id.clone());
            }
        }
        regions.extend(other);
        Self { regions }
    }

    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn non_empty(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| !r.station_ids.is_empty())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

//! Built-in mock catalog the admin serves until a real backend exists.
//!
//! Ten cities, four venues, three events. Venue and event rows are written
//! with their city (and venue) display names and resolved to stable IDs
//! while the catalog is assembled, so the foreign keys always agree with
//! the names at seed time.

use chrono::NaiveDate;
use nibog_types::{City, CityId, Event, EventId, EventStatus, Venue, VenueId};

use crate::error::CatalogError;
use crate::store::CityStore;

/// `(name, state, venues, events, is_active)` for each seeded city, in list order.
const CITIES: [(&str, &str, u32, u32, bool); 10] = [
    ("Hyderabad", "Telangana", 3, 12, true),
    ("Bangalore", "Karnataka", 2, 8, true),
    ("Chennai", "Tamil Nadu", 2, 6, true),
    ("Vizag", "Andhra Pradesh", 1, 4, true),
    ("Mumbai", "Maharashtra", 2, 5, true),
    ("Delhi", "Delhi", 2, 6, true),
    ("Kolkata", "West Bengal", 1, 3, true),
    ("Pune", "Maharashtra", 1, 2, true),
    ("Patna", "Bihar", 1, 2, false),
    ("Ranchi", "Jharkhand", 1, 1, false),
];

/// `(name, city, address, capacity, events)` for each seeded venue.
const VENUES: [(&str, &str, &str, u32, u32); 4] = [
    (
        "Gachibowli Indoor Stadium",
        "Hyderabad",
        "Gachibowli, Hyderabad, Telangana 500032",
        500,
        12,
    ),
    (
        "Hitex Exhibition Center",
        "Hyderabad",
        "Hitex Road, Hyderabad, Telangana 500084",
        300,
        8,
    ),
    (
        "LB Stadium",
        "Hyderabad",
        "Liberty Rd, Hyderabad, Telangana 500001",
        400,
        6,
    ),
    (
        "Indoor Stadium",
        "Chennai",
        "Jawaharlal Nehru Stadium, Chennai, Tamil Nadu 600003",
        300,
        6,
    ),
];

/// `(title, city, venue, date, registrations)` for each seeded event.
const EVENTS: [(&str, &str, &str, &str, u32); 3] = [
    ("Baby Crawling", "Hyderabad", "Gachibowli Indoor Stadium", "2025-10-26", 45),
    ("Baby Walker", "Hyderabad", "Gachibowli Indoor Stadium", "2025-10-26", 38),
    ("Running Race", "Hyderabad", "Hitex Exhibition Center", "2025-11-15", 52),
];

/// Build the seeded catalog.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidSeed`] if a venue or event references a
/// city or venue name that is not in the seed, or a date does not parse.
pub fn seed_catalog() -> Result<CityStore, CatalogError> {
    let cities = seed_cities();
    let venues = seed_venues(&cities)?;
    let events = seed_events(&cities, &venues)?;
    Ok(CityStore::new(cities, venues, events))
}

fn seed_cities() -> Vec<City> {
    (1_u64..)
        .zip(CITIES)
        .map(|(n, (name, state, venues, events, is_active))| City {
            id: CityId(n),
            name: name.to_owned(),
            state: state.to_owned(),
            venues,
            events,
            is_active,
        })
        .collect()
}

fn city_id_by_name(cities: &[City], name: &str) -> Result<CityId, CatalogError> {
    cities
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.id)
        .ok_or_else(|| CatalogError::InvalidSeed(format!("unknown city {name:?}")))
}

fn seed_venues(cities: &[City]) -> Result<Vec<Venue>, CatalogError> {
    (1_u64..)
        .zip(VENUES)
        .map(|(n, (name, city, address, capacity, events))| {
            Ok(Venue {
                id: VenueId(n),
                name: name.to_owned(),
                city_id: city_id_by_name(cities, city)?,
                city: city.to_owned(),
                address: address.to_owned(),
                capacity,
                events,
                is_active: true,
            })
        })
        .collect()
}

fn seed_events(cities: &[City], venues: &[Venue]) -> Result<Vec<Event>, CatalogError> {
    (1_u64..)
        .zip(EVENTS)
        .map(|(n, (title, city, venue, date, registrations))| {
            let venue_id = venues
                .iter()
                .find(|v| v.name == venue)
                .map(|v| v.id)
                .ok_or_else(|| CatalogError::InvalidSeed(format!("unknown venue {venue:?}")))?;
            let date = date
                .parse::<NaiveDate>()
                .map_err(|e| CatalogError::InvalidSeed(format!("bad date {date:?}: {e}")))?;
            Ok(Event {
                id: EventId(n),
                title: title.to_owned(),
                city_id: city_id_by_name(cities, city)?,
                city: city.to_owned(),
                venue_id,
                venue: venue.to_owned(),
                date,
                registrations,
                status: EventStatus::Upcoming,
            })
        })
        .collect()
}

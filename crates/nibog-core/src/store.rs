//! In-memory city catalog.
//!
//! [`CityStore`] owns the ordered city list together with the venue and
//! event collections it joins against. It is the only data source in the
//! admin: every page and API endpoint reads and mutates through it, and
//! nothing outlives the process.

use nibog_types::{City, CityDraft, CityId, Event, Venue};
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::error::CatalogError;
use crate::impact::DeleteImpact;

/// A city together with the venues and events held there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityDetail {
    /// The city record.
    pub city: City,
    /// Venues belonging to the city, in catalog order.
    pub venues: Vec<Venue>,
    /// Events held in the city, in catalog order.
    pub events: Vec<Event>,
    /// Confirmation text for deleting the city.
    pub delete_impact: DeleteImpact,
}

/// Ordered, in-memory collection of cities, venues, and events.
#[derive(Debug, Clone)]
pub struct CityStore {
    cities: Vec<City>,
    venues: Vec<Venue>,
    events: Vec<Event>,
    /// Identifier for the next created city. Never reused after a delete,
    /// so orphaned venues and events cannot attach to a new city.
    next_id: Option<CityId>,
}

impl CityStore {
    /// Create a store from pre-built collections. Order is preserved.
    pub fn new(cities: Vec<City>, venues: Vec<Venue>, events: Vec<Event>) -> Self {
        let next_id = cities
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(Some(CityId(1)), CityId::next);
        Self {
            cities,
            venues,
            events,
            next_id,
        }
    }

    /// All cities in list order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// All venues in catalog order.
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// All events in catalog order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Cities whose name or state contains `query`, ignoring case.
    ///
    /// An empty query matches every city. Order is preserved.
    pub fn search(&self, query: &str) -> Vec<&City> {
        let needle = query.to_lowercase();
        self.cities
            .iter()
            .filter(|c| c.matches_lowercase(&needle))
            .collect()
    }

    /// Look up a city by typed identifier.
    pub fn get(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    /// Look up a city by the identifier as it appears in a URL.
    ///
    /// Anything that is not the identifier of a city in the store,
    /// including strings that do not parse as an identifier, is
    /// reported as not found.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CityNotFound`] carrying `raw`.
    pub fn lookup(&self, raw: &str) -> Result<&City, CatalogError> {
        raw.parse::<CityId>()
            .ok()
            .and_then(|id| self.get(id))
            .ok_or_else(|| CatalogError::CityNotFound(raw.to_owned()))
    }

    /// Venues belonging to the city.
    pub fn venues_in(&self, id: CityId) -> impl Iterator<Item = &Venue> {
        self.venues.iter().filter(move |v| v.city_id == id)
    }

    /// Events held in the city.
    pub fn events_in(&self, id: CityId) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.city_id == id)
    }

    /// Assemble the detail view for the city identified by `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CityNotFound`] if no such city exists.
    pub fn detail(&self, raw: &str) -> Result<CityDetail, CatalogError> {
        let city = self.lookup(raw)?;
        Ok(CityDetail {
            city: city.clone(),
            venues: self.venues_in(city.id).cloned().collect(),
            events: self.events_in(city.id).cloned().collect(),
            delete_impact: DeleteImpact::for_city(city),
        })
    }

    /// Append a new city built from `draft`.
    ///
    /// The new city gets the next free identifier and zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingField`] if a required field is blank,
    /// or [`CatalogError::IdsExhausted`] if no identifier is left.
    pub fn create(&mut self, draft: &CityDraft) -> Result<City, CatalogError> {
        check_required(draft)?;
        let id = self.next_id.ok_or(CatalogError::IdsExhausted)?;
        self.next_id = id.next();

        let city = City {
            id,
            name: draft.name.trim().to_owned(),
            state: draft.state.trim().to_owned(),
            venues: 0,
            events: 0,
            is_active: draft.is_active,
        };
        info!(city_id = %city.id, name = %city.name, "City created");
        self.cities.push(city.clone());
        Ok(city)
    }

    /// Overwrite the editable fields of an existing city.
    ///
    /// Counters are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingField`] if a required field is blank,
    /// or [`CatalogError::CityNotFound`] if the city does not exist.
    pub fn update(&mut self, id: CityId, draft: &CityDraft) -> Result<City, CatalogError> {
        check_required(draft)?;
        let city = self
            .cities
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CatalogError::CityNotFound(id.to_string()))?;

        city.name = draft.name.trim().to_owned();
        city.state = draft.state.trim().to_owned();
        city.is_active = draft.is_active;
        info!(city_id = %city.id, name = %city.name, "City updated");
        Ok(city.clone())
    }

    /// Remove exactly one city, leaving the others in order.
    ///
    /// Venues and events are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CityNotFound`] if the city does not exist.
    pub fn remove(&mut self, id: CityId) -> Result<City, CatalogError> {
        let index = self
            .cities
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CatalogError::CityNotFound(id.to_string()))?;
        let city = self.cities.remove(index);
        info!(city_id = %city.id, name = %city.name, "City deleted");
        Ok(city)
    }
}

impl Default for CityStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

/// Reject drafts with blank required fields, naming the offenders.
///
/// # Errors
///
/// Returns [`CatalogError::MissingField`] listing the blank fields in
/// alphabetical order.
pub fn check_required(draft: &CityDraft) -> Result<(), CatalogError> {
    draft.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(ToString::to_string)
            .collect();
        fields.sort();
        CatalogError::MissingField(fields)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed::seed_catalog;

    fn store() -> CityStore {
        seed_catalog().unwrap()
    }

    fn draft(name: &str, state: &str, is_active: bool) -> CityDraft {
        CityDraft {
            name: name.to_owned(),
            state: state.to_owned(),
            is_active,
        }
    }

    fn names(cities: &[&City]) -> Vec<String> {
        cities.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn empty_search_returns_everything_in_order() {
        let store = store();
        let all = store.search("");
        assert_eq!(all.len(), 10);
        assert_eq!(all.first().map(|c| c.name.as_str()), Some("Hyderabad"));
        assert_eq!(all.last().map(|c| c.name.as_str()), Some("Ranchi"));
    }

    #[test]
    fn search_matches_state_case_insensitively() {
        let store = store();
        assert_eq!(names(&store.search("MAHARASHTRA")), ["Mumbai", "Pune"]);
    }

    #[test]
    fn search_matches_name_or_state_substring() {
        let store = store();
        // "an" hits Telangana, Bangalore, Andhra Pradesh, and Ranchi.
        assert_eq!(
            names(&store.search("an")),
            ["Hyderabad", "Bangalore", "Vizag", "Ranchi"]
        );
    }

    #[test]
    fn search_with_no_hits_is_empty() {
        assert!(store().search("zzz").is_empty());
    }

    #[test]
    fn search_agrees_with_brute_force_for_every_substring() {
        let store = store();
        let mut queries: Vec<String> = Vec::new();
        for city in store.cities() {
            for text in [&city.name, &city.state] {
                let chars: Vec<char> = text.chars().collect();
                for len in 1..=chars.len().min(3) {
                    for window in chars.windows(len) {
                        queries.push(window.iter().collect::<String>().to_uppercase());
                    }
                }
            }
        }

        for query in &queries {
            let lowered = query.to_lowercase();
            let expected: Vec<CityId> = store
                .cities()
                .iter()
                .filter(|c| {
                    c.name.to_lowercase().contains(&lowered)
                        || c.state.to_lowercase().contains(&lowered)
                })
                .map(|c| c.id)
                .collect();
            let actual: Vec<CityId> = store.search(query).iter().map(|c| c.id).collect();
            assert_eq!(actual, expected, "query {query:?}");
        }
    }

    #[test]
    fn lookup_unknown_or_malformed_is_not_found() {
        let store = store();
        for raw in ["0", "11", "999", "abc", "", "01", "-1"] {
            assert_eq!(
                store.lookup(raw).err(),
                Some(CatalogError::CityNotFound(raw.to_owned())),
                "{raw:?}"
            );
        }
        assert_eq!(store.lookup("3").map(|c| c.name.as_str()), Ok("Chennai"));
    }

    #[test]
    fn detail_joins_match_name_equality() {
        let store = store();
        for city in store.cities() {
            let detail = store.detail(&city.id.to_string()).unwrap();

            let by_name_venues: Vec<&Venue> =
                store.venues().iter().filter(|v| v.city == city.name).collect();
            let by_name_events: Vec<&Event> =
                store.events().iter().filter(|e| e.city == city.name).collect();

            assert_eq!(detail.venues.iter().collect::<Vec<_>>(), by_name_venues);
            assert_eq!(detail.events.iter().collect::<Vec<_>>(), by_name_events);
        }
    }

    #[test]
    fn hyderabad_detail_has_three_venues_and_three_events() {
        let detail = store().detail("1").unwrap();
        assert_eq!(detail.venues.len(), 3);
        assert_eq!(detail.events.len(), 3);
        assert!(detail.delete_impact.has_associated_data);
    }

    #[test]
    fn bangalore_detail_has_empty_tables() {
        let detail = store().detail("2");
        assert!(detail.as_ref().is_ok_and(|d| d.venues.is_empty() && d.events.is_empty()));
    }

    #[test]
    fn join_survives_rename() {
        let mut store = store();
        let renamed = store.update(CityId(1), &draft("Cyberabad", "Telangana", true));
        assert!(renamed.is_ok());
        let detail = store.detail("1");
        assert!(detail.is_ok_and(|d| d.venues.len() == 3 && d.events.len() == 3));
    }

    #[test]
    fn remove_deletes_exactly_one_city() {
        let mut store = store();
        let before: Vec<CityId> = store.cities().iter().map(|c| c.id).collect();
        let removed = store.remove(CityId(4));
        assert_eq!(removed.map(|c| c.name), Ok(String::from("Vizag")));

        let after: Vec<CityId> = store.cities().iter().map(|c| c.id).collect();
        let expected: Vec<CityId> = before.into_iter().filter(|id| *id != CityId(4)).collect();
        assert_eq!(after, expected);
        assert_eq!(store.venues().len(), 4);
        assert_eq!(store.events().len(), 3);
    }

    #[test]
    fn remove_unknown_is_not_found() {
        let mut store = store();
        assert_eq!(
            store.remove(CityId(42)),
            Err(CatalogError::CityNotFound(String::from("42")))
        );
        assert_eq!(store.cities().len(), 10);
    }

    #[test]
    fn create_appends_with_next_id_and_zero_counters() {
        let mut store = store();
        let created = store.create(&draft("  Goa ", "Goa", false)).unwrap();
        assert_eq!(created.id, CityId(11));
        assert_eq!(created.name, "Goa");
        assert_eq!((created.venues, created.events), (0, 0));
        assert!(!created.is_active);
        assert_eq!(store.cities().last(), Some(&created));
    }

    #[test]
    fn create_in_empty_store_starts_at_one() {
        let mut store = CityStore::default();
        let created = store.create(&draft("Goa", "Goa", true));
        assert_eq!(created.map(|c| c.id), Ok(CityId(1)));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = store();
        store.remove(CityId(10)).unwrap();
        let created = store.create(&draft("Goa", "Goa", true)).unwrap();
        assert_eq!(created.id, CityId(11));
    }

    #[test]
    fn create_rejects_blank_required_fields() {
        let mut store = store();
        assert_eq!(
            store.create(&draft("", " ", true)),
            Err(CatalogError::MissingField(vec![
                String::from("name"),
                String::from("state")
            ]))
        );
        assert_eq!(store.cities().len(), 10);
    }

    #[test]
    fn update_keeps_counters() {
        let mut store = store();
        let updated = store.update(CityId(9), &draft("Patna", "Bihar", true)).unwrap();
        assert!(updated.is_active);
        assert_eq!((updated.venues, updated.events), (1, 2));
        assert_eq!(store.get(CityId(9)), Some(&updated));
    }

    #[test]
    fn update_unknown_is_not_found() {
        let mut store = store();
        assert_eq!(
            store.update(CityId(77), &draft("X", "Y", true)),
            Err(CatalogError::CityNotFound(String::from("77")))
        );
    }
}

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;

use crate::models::dates::parse_calendar_date;

/// Wire shape of `GET /api/unavailable-dates?rc_id={id}`.
#[derive(Debug, Deserialize)]
pub struct UnavailableDatesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub unavailable_dates: Vec<String>,
}

/// Read-only snapshot of the dates already reserved for one unit, fetched
/// once per page load. An empty set means every date is open — including
/// when the fetch failed or has not resolved, which is the deliberate
/// fail-open default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnavailableDateSet {
    dates: BTreeSet<NaiveDate>,
}

impl UnavailableDateSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Entries that do not parse as calendar dates are skipped rather than
    /// rejected; a malformed row must not block booking.
    pub fn from_response(response: UnavailableDatesResponse) -> Self {
        let mut dates = BTreeSet::new();
        for raw in &response.unavailable_dates {
            match parse_calendar_date(raw) {
                Some(date) => {
                    dates.insert(date);
                }
                None => debug!("skipping unparseable unavailable date {:?}", raw),
            }
        }
        Self { dates }
    }

    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}

impl FromIterator<NaiveDate> for UnavailableDateSet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Per-unit fetch state. Anything that has not settled counts as
/// provisionally available so the listing never flashes a false
/// "unavailable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitAvailability {
    Pending,
    Loaded(UnavailableDateSet),
}

/// The listing view's map of unit id to availability snapshot. Fetches are
/// issued concurrently, one per visible unit, and land independently.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityMap {
    units: HashMap<i64, UnitAvailability>,
}

impl AvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_pending(&mut self, rc_id: i64) {
        self.units.insert(rc_id, UnitAvailability::Pending);
    }

    pub fn insert(&mut self, rc_id: i64, set: UnavailableDateSet) {
        self.units.insert(rc_id, UnitAvailability::Loaded(set));
    }

    pub fn state(&self, rc_id: i64) -> Option<&UnitAvailability> {
        self.units.get(&rc_id)
    }

    /// The unavailable-date set for a unit, if its fetch has settled.
    pub fn loaded(&self, rc_id: i64) -> Option<&UnavailableDateSet> {
        match self.units.get(&rc_id) {
            Some(UnitAvailability::Loaded(set)) => Some(set),
            _ => None,
        }
    }

    pub fn is_settled(&self, rc_id: i64) -> bool {
        matches!(self.units.get(&rc_id), Some(UnitAvailability::Loaded(_)))
    }

    /// True once every listed unit has a settled snapshot. Callers hold
    /// back filtering decisions until this flips.
    pub fn all_settled<I: IntoIterator<Item = i64>>(&self, rc_ids: I) -> bool {
        rc_ids.into_iter().all(|rc_id| self.is_settled(rc_id))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_response_parses_and_skips_garbage() {
        let set = UnavailableDateSet::from_response(UnavailableDatesResponse {
            success: true,
            unavailable_dates: vec![
                "2025-12-25".to_string(),
                "not-a-date".to_string(),
                "2025-12-31".to_string(),
            ],
        });

        assert_eq!(set.len(), 2);
        assert!(set.contains(date(2025, 12, 25)));
        assert!(set.contains(date(2025, 12, 31)));
    }

    #[test]
    fn test_empty_set_contains_nothing() {
        let set = UnavailableDateSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(date(2025, 1, 1)));
    }

    #[test]
    fn test_map_distinguishes_pending_from_loaded() {
        let mut map = AvailabilityMap::new();
        map.mark_pending(1);
        map.insert(2, UnavailableDateSet::from_iter([date(2025, 6, 11)]));

        assert!(!map.is_settled(1));
        assert!(map.is_settled(2));
        assert!(map.loaded(1).is_none());
        assert!(map.loaded(2).unwrap().contains(date(2025, 6, 11)));
        assert!(map.state(3).is_none());

        assert!(!map.all_settled([1, 2]));
        assert!(map.all_settled([2]));
    }
}

use chrono::NaiveDate;

use crate::models::availability::{AvailabilityMap, UnavailableDateSet, UnitAvailability};
use crate::models::villa::Villa;

/// Date-availability checks shared by the booking form and the villa
/// listing. All total functions over locally-held snapshots; nothing here
/// performs I/O, and missing data always resolves to "available" so an
/// unloaded snapshot can never block a booking.
pub struct AvailabilityService;

impl AvailabilityService {
    /// False only when the date is a member of the unit's reserved set.
    pub fn is_date_available(date: NaiveDate, unavailable: &UnavailableDateSet) -> bool {
        !unavailable.contains(date)
    }

    /// Checks every night of `[check_in, check_out)` against the reserved
    /// set. With a missing or unordered pair there is nothing to check yet
    /// and the answer stays true until the form is well-formed.
    pub fn is_range_available(
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        unavailable: &UnavailableDateSet,
    ) -> bool {
        let (check_in, check_out) = match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => (check_in, check_out),
            _ => return true,
        };
        if check_out <= check_in {
            return true;
        }

        check_in
            .iter_days()
            .take_while(|date| *date < check_out)
            .all(|date| Self::is_date_available(date, unavailable))
    }

    pub fn is_guest_count_valid(pax: u32, unit: &Villa) -> bool {
        pax >= 1 && pax <= unit.max_guests
    }

    /// Units open on the given date. A unit whose availability fetch has
    /// not settled is kept, never excluded on missing data; callers that
    /// want exact results hold off until the map reports all settled.
    pub fn filter_units_by_date<'a>(
        units: &'a [Villa],
        date: NaiveDate,
        availability: &AvailabilityMap,
    ) -> Vec<&'a Villa> {
        units
            .iter()
            .filter(|unit| match availability.state(unit.rc_id) {
                Some(UnitAvailability::Loaded(set)) => Self::is_date_available(date, set),
                Some(UnitAvailability::Pending) | None => true,
            })
            .collect()
    }
}

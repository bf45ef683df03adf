use chrono::{NaiveDate, NaiveDateTime};

use crate::models::villa::Villa;

const SECONDS_PER_DAY: i64 = 86_400;

pub struct PricingService;

impl PricingService {
    /// Nights between check-in (inclusive) and check-out (exclusive).
    /// Zero whenever the pair is not strictly ordered; an unfinished or
    /// backwards range is an incomplete form, not an error.
    pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
        if check_out <= check_in {
            return 0;
        }
        (check_out - check_in).num_days() as u32
    }

    /// Night count for timestamped ranges. Any partial day counts as a
    /// full night, so a 2pm-to-11am stay still bills one night.
    pub fn nights_between_times(check_in: NaiveDateTime, check_out: NaiveDateTime) -> u32 {
        let seconds = (check_out - check_in).num_seconds();
        if seconds <= 0 {
            return 0;
        }
        (seconds as u64).div_ceil(SECONDS_PER_DAY as u64) as u32
    }

    /// Nightly price times nights. A zero total marks the request as not
    /// yet submittable; it is never a valid free booking.
    pub fn total_price(unit: &Villa, check_in: NaiveDate, check_out: NaiveDate) -> u64 {
        u64::from(unit.price) * u64::from(Self::nights_between(check_in, check_out))
    }
}

use chrono::NaiveDate;

use crate::models::availability::UnavailableDateSet;
use crate::models::villa::Villa;
use crate::services::availability_service::AvailabilityService;
use crate::services::pricing_service::PricingService;

/// The booking form's in-progress state: whatever the customer has typed
/// so far. Fields stay optional until the pickers are filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub pax: u32,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            pax: 1,
        }
    }
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Everything the form derives from one recomputation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingQuote {
    pub nights: u32,
    pub total_price: u64,
    pub range_available: bool,
    pub guest_count_valid: bool,
}

impl BookingQuote {
    /// Gates the submit control. A zero total means the range is still
    /// incomplete, so availability alone is never enough.
    pub fn is_submittable(&self) -> bool {
        self.total_price > 0 && self.range_available && self.guest_count_valid
    }
}

pub struct QuoteService;

impl QuoteService {
    /// Recomputed from scratch on every input change; no state carries
    /// over between calls.
    pub fn evaluate(
        unit: &Villa,
        draft: &BookingDraft,
        unavailable: &UnavailableDateSet,
    ) -> BookingQuote {
        let (nights, total_price) = match (draft.check_in, draft.check_out) {
            (Some(check_in), Some(check_out)) => (
                PricingService::nights_between(check_in, check_out),
                PricingService::total_price(unit, check_in, check_out),
            ),
            _ => (0, 0),
        };

        BookingQuote {
            nights,
            total_price,
            range_available: AvailabilityService::is_range_available(
                draft.check_in,
                draft.check_out,
                unavailable,
            ),
            guest_count_valid: AvailabilityService::is_guest_count_valid(draft.pax, unit),
        }
    }
}

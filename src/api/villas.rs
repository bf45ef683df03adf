use futures::future::join_all;
use log::{debug, warn};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::models::availability::{AvailabilityMap, UnavailableDateSet, UnavailableDatesResponse};
use crate::models::response::{ItemPayload, ListPayload};
use crate::models::villa::{Villa, VillaRecord};

/// All units in the catalog, normalized.
pub async fn list_villas(client: &ApiClient) -> Result<Vec<Villa>, ApiError> {
    let payload: ListPayload<VillaRecord> = client.get("/api/villas").await?;
    Ok(payload
        .into_items()
        .into_iter()
        .map(|record| Villa::from_record(record, client.base_url()))
        .collect())
}

/// One unit by backend id. Older backends lack the single-villa endpoint,
/// so any failure there falls back to scanning the full list.
pub async fn get_villa(client: &ApiClient, rc_id: i64) -> Result<Option<Villa>, ApiError> {
    let path = format!("/api/villas/{}", rc_id);
    match client.get::<ItemPayload<VillaRecord>>(&path).await {
        Ok(payload) => Ok(payload
            .into_item()
            .map(|record| Villa::from_record(record, client.base_url()))),
        Err(err) => {
            debug!(
                "single-villa endpoint failed for unit {} ({}), scanning the list",
                rc_id, err
            );
            let villas = list_villas(client).await?;
            Ok(villas.into_iter().find(|villa| villa.rc_id == rc_id))
        }
    }
}

/// The reserved-date snapshot for one unit.
pub async fn fetch_unavailable_dates(
    client: &ApiClient,
    rc_id: i64,
) -> Result<UnavailableDateSet, ApiError> {
    let path = format!("/api/unavailable-dates?rc_id={}", rc_id);
    let response: UnavailableDatesResponse = client.get(&path).await?;
    Ok(UnavailableDateSet::from_response(response))
}

/// Fail-open variant: a failed fetch degrades to "every date open" instead
/// of blocking the booking flow.
pub async fn unavailable_dates_or_empty(client: &ApiClient, rc_id: i64) -> UnavailableDateSet {
    match fetch_unavailable_dates(client, rc_id).await {
        Ok(set) => set,
        Err(err) => {
            warn!(
                "unavailable-dates fetch failed for unit {}: {}; treating all dates as open",
                rc_id, err
            );
            UnavailableDateSet::empty()
        }
    }
}

/// One concurrent fetch per listed unit. Every entry in the result is
/// settled; units the backend errored on settle to the empty set.
pub async fn fetch_availability_map(client: &ApiClient, rc_ids: &[i64]) -> AvailabilityMap {
    let fetches = rc_ids.iter().map(|&rc_id| async move {
        (rc_id, unavailable_dates_or_empty(client, rc_id).await)
    });

    let mut map = AvailabilityMap::new();
    for (rc_id, set) in join_all(fetches).await {
        map.insert(rc_id, set);
    }
    map
}

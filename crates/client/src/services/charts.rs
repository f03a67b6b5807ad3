//! Chart data endpoints

use chrono::NaiveDate;

use roomsense_core::capture::{daily_series, Capture, CaptureDto, DailyPoint};
use roomsense_core::hydra::HydraCollection;

use crate::http::ApiClient;
use crate::Result;

/// Fetch a room's last week of captures and bucket them into the
/// 7-point daily series the chart renders
pub async fn room_week_series(
    client: &ApiClient,
    room_id: u64,
    today: NaiveDate,
) -> Result<Vec<DailyPoint>> {
    let collection: HydraCollection<CaptureDto> = client
        .get(&format!("/rooms/{}/captures?days=7", room_id))
        .await?;
    let captures: Vec<Capture> = collection
        .into_members()
        .into_iter()
        .map(Capture::from_dto)
        .collect();
    Ok(daily_series(&captures, today))
}

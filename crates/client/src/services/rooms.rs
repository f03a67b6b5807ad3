//! Room endpoints

use tracing::debug;

use roomsense_core::hydra::HydraCollection;
use roomsense_core::room::{Room, RoomDetail, RoomDetailDto, RoomDto, RoomUpdateDto};

use crate::http::ApiClient;
use crate::Result;

/// `GET /rooms`
pub async fn list_rooms(client: &ApiClient) -> Result<Vec<Room>> {
    let collection: HydraCollection<RoomDto> = client.get("/rooms").await?;
    let rooms: Vec<Room> = collection
        .into_members()
        .into_iter()
        .map(Room::from_dto)
        .collect();
    debug!(count = rooms.len(), "Fetched room list");
    Ok(rooms)
}

/// `GET /rooms/{id}`
pub async fn get_room(client: &ApiClient, id: u64) -> Result<RoomDetail> {
    let dto: RoomDetailDto = client.get(&format!("/rooms/{}", id)).await?;
    Ok(RoomDetail::from_dto(dto))
}

/// `GET /rooms/{id}/last` — detail refreshed with the latest reading per type
pub async fn get_room_last_captures(client: &ApiClient, id: u64) -> Result<RoomDetail> {
    let dto: RoomDetailDto = client.get(&format!("/rooms/{}/last", id)).await?;
    Ok(RoomDetail::from_dto(dto))
}

/// `PUT /rooms/{id}`
pub async fn update_room(client: &ApiClient, id: u64, update: &RoomUpdateDto) -> Result<Room> {
    let dto: RoomDto = client.put(&format!("/rooms/{}", id), update).await?;
    Ok(Room::from_dto(dto))
}

/// `DELETE /rooms/{id}`
pub async fn delete_room(client: &ApiClient, id: u64) -> Result<()> {
    client.delete(&format!("/rooms/{}", id)).await
}

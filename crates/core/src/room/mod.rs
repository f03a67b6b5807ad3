//! Room models and adapters

mod dto;
mod model;

pub use dto::{RoomDetailDto, RoomDto, RoomUpdateDto};
pub use model::{Room, RoomDetail};

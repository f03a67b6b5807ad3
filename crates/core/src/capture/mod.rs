//! Sensor capture readings and their type catalogue

mod catalogue;
mod model;
mod series;

pub use catalogue::CaptureTypeCatalogue;
pub use model::{Capture, CaptureDto, CaptureType, CaptureTypeDto, TypedCapture, TypedCaptureDto};
pub use series::{daily_series, DailyPoint};

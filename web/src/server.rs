use leptos::prelude::*;
use leptos::server;
use shared_types::HotelRecord;

#[cfg(feature = "ssr")]
use crate::hotel::{directory::directory, resolve, HotelDirectory};

/// `Ok(None)` means the id is unknown; it is not an error.
#[server]
pub async fn fetch_hotel(id: String) -> Result<Option<HotelRecord>, ServerFnError> {
    let hotel = resolve(directory(), &id);
    match &hotel {
        Some(hotel) => tracing::debug!(id = %id, name = %hotel.name, "hotel found"),
        None => tracing::debug!(id = %id, "no hotel with this id"),
    }
    Ok(hotel)
}

#[server]
pub async fn list_hotels() -> Result<Vec<HotelRecord>, ServerFnError> {
    let hotels = directory().all();
    if hotels.is_empty() {
        tracing::warn!("hotel directory is empty");
    }
    Ok(hotels)
}

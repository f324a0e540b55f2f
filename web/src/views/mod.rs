pub mod hotel_details;
pub mod hotels;
pub mod not_found;

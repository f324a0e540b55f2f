pub mod booking_modal;
pub mod error;
pub mod footer;
pub mod loading;
pub mod navbar;

// Re-export commonly used types
pub use booking_modal::BookingModal;
pub use footer::Footer;
pub use loading::{HotelDetailsSkeleton, LoadingView};
pub use navbar::Navbar;

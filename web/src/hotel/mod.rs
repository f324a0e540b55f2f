pub mod data;
pub mod directory;
pub mod state;

pub use directory::{DirectoryError, HotelDirectory, StaticHotelDirectory};
pub use state::{
    resolve, select_render, BookingDialogProps, GateTicket, LoadingGate, ModalToggle,
    RenderBranch, ViewState,
};

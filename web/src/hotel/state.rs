use shared_types::{CurrentUser, HotelRecord};

use super::directory::HotelDirectory;

/// Looks up `id` in `directory`. Absence is a normal outcome, not an error.
pub fn resolve<D: HotelDirectory + ?Sized>(directory: &D, id: &str) -> Option<HotelRecord> {
    directory.find_by_id(id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    NotFound,
    Found(HotelRecord),
}

impl ViewState {
    pub fn resolved(lookup: Option<HotelRecord>) -> Self {
        match lookup {
            Some(hotel) => ViewState::Found(hotel),
            None => ViewState::NotFound,
        }
    }

    /// `lookup` is `None` while the fetch is still pending.
    pub fn gated(gate_open: bool, lookup: Option<Option<HotelRecord>>) -> Self {
        match (gate_open, lookup) {
            (true, Some(lookup)) => ViewState::resolved(lookup),
            _ => ViewState::Loading,
        }
    }
}

/// Identifies one activation of a [`LoadingGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateTicket(u64);

/// Holds the view in `Loading` until the timer of the latest activation fires.
#[derive(Debug, Clone, Default)]
pub struct LoadingGate {
    generation: u64,
    open: bool,
}

impl LoadingGate {
    pub fn activate(&mut self) -> GateTicket {
        self.generation += 1;
        self.open = false;
        GateTicket(self.generation)
    }

    /// Opens the gate if `ticket` belongs to the current activation.
    /// Returns whether this call changed the gate.
    pub fn open(&mut self, ticket: GateTicket) -> bool {
        if ticket.0 != self.generation || self.open {
            return false;
        }
        self.open = true;
        true
    }

    pub fn cancel(&mut self) {
        if !self.open {
            self.generation += 1;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalToggle {
    open: bool,
}

impl ModalToggle {
    /// The booking call-to-action only exists once a hotel is shown.
    pub fn request_open(&mut self, state: &ViewState) -> bool {
        if matches!(state, ViewState::Found(_)) {
            self.open = true;
        }
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDialogProps {
    pub hotel_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderBranch {
    Skeleton,
    Fallback,
    Detail {
        hotel: HotelRecord,
        dialog: Option<BookingDialogProps>,
    },
}

pub fn select_render(
    gate_open: bool,
    lookup: Option<Option<HotelRecord>>,
    modal_open: bool,
    user: Option<&CurrentUser>,
) -> RenderBranch {
    match ViewState::gated(gate_open, lookup) {
        ViewState::Loading => RenderBranch::Skeleton,
        ViewState::NotFound => RenderBranch::Fallback,
        ViewState::Found(hotel) => {
            let dialog = match user {
                Some(user) if modal_open => Some(BookingDialogProps {
                    hotel_id: hotel.id.clone(),
                    user_id: user.id.clone(),
                }),
                _ => None,
            };
            RenderBranch::Detail { hotel, dialog }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel::directory::{HotelDirectory, StaticHotelDirectory};

    fn reference_set() -> StaticHotelDirectory {
        StaticHotelDirectory::new(vec![
            HotelRecord {
                id: "h1".to_string(),
                name: "Ocean View".to_string(),
                location: "Lisbon".to_string(),
                description: "By the sea.".to_string(),
                image: "/images/ocean-view.jpg".to_string(),
            },
            HotelRecord {
                id: "h2".to_string(),
                name: "Alpine Lodge".to_string(),
                location: "Zermatt".to_string(),
                description: "In the mountains.".to_string(),
                image: "/images/alpine-lodge.jpg".to_string(),
            },
        ])
        .unwrap()
    }

    fn user(id: &str) -> CurrentUser {
        CurrentUser {
            id: id.to_string(),
            name: None,
        }
    }

    #[test]
    fn present_ids_resolve_to_found_after_gate() {
        let directory = reference_set();
        for hotel in directory.all() {
            let state = ViewState::gated(true, Some(resolve(&directory, &hotel.id)));
            assert_eq!(state, ViewState::Found(hotel));
        }
    }

    #[test]
    fn absent_ids_resolve_to_not_found_after_gate() {
        let directory = reference_set();
        for id in ["missing", "", "h1 ", "H1", "h1/../h2", "💥"] {
            let state = ViewState::gated(true, Some(resolve(&directory, id)));
            assert_eq!(state, ViewState::NotFound, "id {id:?}");
        }
    }

    #[test]
    fn loading_until_gate_opens_regardless_of_id() {
        let directory = reference_set();
        for id in ["h1", "missing", ""] {
            let lookup = resolve(&directory, id);
            assert_eq!(ViewState::gated(false, Some(lookup)), ViewState::Loading);
        }
        // Gate open but fetch still pending.
        assert_eq!(ViewState::gated(true, None), ViewState::Loading);
    }

    #[test]
    fn lookup_is_idempotent() {
        let directory = reference_set();
        let first = resolve(&directory, "h2");
        let second = resolve(&directory, "h2");
        assert_eq!(first, second);
        assert_eq!(directory.all().len(), 2);
    }

    #[test]
    fn gate_opens_only_for_latest_activation() {
        let mut gate = LoadingGate::default();
        let stale = gate.activate();
        let current = gate.activate();

        assert!(!gate.open(stale));
        assert!(!gate.is_open());
        assert!(gate.open(current));
        assert!(gate.is_open());
        assert!(!gate.open(current));
    }

    #[test]
    fn reactivation_closes_an_open_gate() {
        let mut gate = LoadingGate::default();
        let first = gate.activate();
        assert!(gate.open(first));

        let second = gate.activate();
        assert!(!gate.is_open());
        assert!(!gate.open(first));
        assert!(gate.open(second));
    }

    #[test]
    fn cancelled_ticket_never_opens() {
        let mut gate = LoadingGate::default();
        let ticket = gate.activate();
        gate.cancel();
        assert!(!gate.open(ticket));
        assert!(!gate.is_open());
    }

    #[test]
    fn navigating_while_loading_drops_previous_result() {
        let directory = reference_set();
        let mut gate = LoadingGate::default();

        let for_h1 = gate.activate();
        let for_missing = gate.activate();

        // The timer armed for h1 fires late.
        assert!(!gate.open(for_h1));
        let lookup = Some(resolve(&directory, "missing"));
        assert_eq!(
            select_render(gate.is_open(), lookup.clone(), false, None),
            RenderBranch::Skeleton
        );

        assert!(gate.open(for_missing));
        assert_eq!(
            select_render(gate.is_open(), lookup, false, None),
            RenderBranch::Fallback
        );
    }

    #[test]
    fn modal_opens_only_when_found() {
        let directory = reference_set();
        let mut modal = ModalToggle::default();

        assert!(!modal.request_open(&ViewState::Loading));
        assert!(!modal.request_open(&ViewState::NotFound));
        assert!(!modal.is_open());

        let found = ViewState::resolved(resolve(&directory, "h1"));
        assert!(modal.request_open(&found));
        assert!(modal.is_open());

        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn dialog_requires_modal_and_user() {
        let lookup = Some(resolve(&reference_set(), "h1"));
        let u1 = user("u1");

        let branch = select_render(true, lookup.clone(), true, None);
        assert!(matches!(branch, RenderBranch::Detail { dialog: None, .. }));

        let branch = select_render(true, lookup.clone(), false, Some(&u1));
        assert!(matches!(branch, RenderBranch::Detail { dialog: None, .. }));

        let branch = select_render(true, lookup, true, Some(&u1));
        match branch {
            RenderBranch::Detail { hotel, dialog } => {
                assert_eq!(hotel.name, "Ocean View");
                assert_eq!(
                    dialog,
                    Some(BookingDialogProps {
                        hotel_id: "h1".to_string(),
                        user_id: "u1".to_string(),
                    })
                );
            }
            other => panic!("expected detail, got {other:?}"),
        }
    }

    #[test]
    fn closing_removes_dialog() {
        let lookup = Some(resolve(&reference_set(), "h1"));
        let u1 = user("u1");
        let found = ViewState::gated(true, lookup.clone());

        let mut modal = ModalToggle::default();
        modal.request_open(&found);
        let branch = select_render(true, lookup.clone(), modal.is_open(), Some(&u1));
        assert!(matches!(branch, RenderBranch::Detail { dialog: Some(_), .. }));

        modal.close();
        let branch = select_render(true, lookup, modal.is_open(), Some(&u1));
        assert!(matches!(branch, RenderBranch::Detail { dialog: None, .. }));
    }

    #[test]
    fn missing_id_renders_fallback_even_with_modal_and_user() {
        let lookup = Some(resolve(&reference_set(), "missing"));
        let u1 = user("u1");
        assert_eq!(
            select_render(true, lookup, true, Some(&u1)),
            RenderBranch::Fallback
        );
    }
}

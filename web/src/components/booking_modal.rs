use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;
use thiserror::Error;

pub const MAX_GUESTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub hotel_id: String,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl BookingRequest {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingFormError {
    #[error("Please choose a check-in date")]
    MissingCheckIn,
    #[error("Please choose a check-out date")]
    MissingCheckOut,
    #[error("`{0}` is not a valid date")]
    InvalidDate(String),
    #[error("Check-out must be after check-in")]
    CheckOutNotAfterCheckIn,
    #[error("Guests must be a number between 1 and 10")]
    InvalidGuests,
}

fn parse_date(value: &str, missing: BookingFormError) -> Result<NaiveDate, BookingFormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(missing);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| BookingFormError::InvalidDate(value.to_string()))
}

pub fn validate_booking(
    hotel_id: &str,
    user_id: &str,
    check_in: &str,
    check_out: &str,
    guests: &str,
) -> Result<BookingRequest, BookingFormError> {
    let check_in = parse_date(check_in, BookingFormError::MissingCheckIn)?;
    let check_out = parse_date(check_out, BookingFormError::MissingCheckOut)?;
    if check_out <= check_in {
        return Err(BookingFormError::CheckOutNotAfterCheckIn);
    }

    let guests = guests
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|g| (1..=MAX_GUESTS).contains(g))
        .ok_or(BookingFormError::InvalidGuests)?;

    Ok(BookingRequest {
        hotel_id: hotel_id.to_string(),
        user_id: user_id.to_string(),
        check_in,
        check_out,
        guests,
    })
}

/// Booking dialog for one hotel. Only collects the stay details; nothing is
/// reserved until the booking service picks the request up.
#[component]
pub fn BookingModal(
    hotel_id: String,
    user_id: String,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let check_in = RwSignal::new(String::new());
    let check_out = RwSignal::new(String::new());
    let guests = RwSignal::new("2".to_string());

    // 1: stay details, 2: confirmation
    let current_step = RwSignal::new(1);
    let form_error = RwSignal::new(None::<String>);
    let confirmed = RwSignal::new(None::<BookingRequest>);

    let is_button_disabled = Memo::new(move |_| {
        check_in.get().trim().is_empty() || check_out.get().trim().is_empty()
    });

    let hotel_for_submit = hotel_id.clone();
    let handle_submit = move || {
        match validate_booking(
            &hotel_for_submit,
            &user_id,
            &check_in.get(),
            &check_out.get(),
            &guests.get(),
        ) {
            Ok(request) => {
                leptos::logging::log!(
                    "booking request for hotel {} by {}: {} night(s)",
                    request.hotel_id,
                    request.user_id,
                    request.nights()
                );
                form_error.set(None);
                confirmed.set(Some(request));
                current_step.set(2);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="booking-modal-overlay show">
            <div class="booking-modal" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h2>{move || match current_step.get() {
                        1 => "Book Your Stay".to_string(),
                        _ => "Request Received".to_string(),
                    }}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close()
                        class="close-button"
                    >
                        "×"
                    </Button>
                </div>

                <div class="modal-content">
                    {move || match current_step.get() {
                        1 => {
                            let handle_submit = handle_submit.clone();
                            view! {
                                <form class="booking-form-content" on:submit=move |ev| {
                                    ev.prevent_default();
                                    handle_submit();
                                }>
                                    <div class="form-row">
                                        <div class="form-group">
                                            <label for="check-in">"Check-in *"</label>
                                            <Input id="check-in" input_type=InputType::Date value=check_in />
                                        </div>
                                        <div class="form-group">
                                            <label for="check-out">"Check-out *"</label>
                                            <Input id="check-out" input_type=InputType::Date value=check_out />
                                        </div>
                                    </div>
                                    <div class="form-group">
                                        <label for="guests">"Guests"</label>
                                        <Input id="guests" input_type=InputType::Number value=guests />
                                    </div>

                                    {move || form_error.get().map(|error| view! {
                                        <div class="error-message">
                                            <p>{error}</p>
                                        </div>
                                    })}

                                    <div class="form-actions">
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| on_close()
                                        >
                                            "Cancel"
                                        </Button>
                                        <Button
                                            button_type=ButtonType::Submit
                                            appearance=ButtonAppearance::Primary
                                            disabled=Signal::from(is_button_disabled)
                                        >
                                            "Request Booking"
                                        </Button>
                                    </div>
                                </form>
                            }.into_any()
                        }
                        _ => view! {
                            <div class="confirmation-step">
                                <div class="success-icon">"✓"</div>
                                {move || confirmed.get().map(|request| view! {
                                    <p class="confirmation-text">
                                        {format!(
                                            "{} night(s) from {} to {} for {} guest(s).",
                                            request.nights(),
                                            request.check_in.format("%b %e, %Y"),
                                            request.check_out.format("%b %e, %Y"),
                                            request.guests,
                                        )}
                                    </p>
                                })}
                                <div class="confirmation-actions">
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| on_close()
                                    >
                                        "Done"
                                    </Button>
                                </div>
                            </div>
                        }.into_any(),
                    }}
                </div>
                <p class="modal-footnote">{format!("Hotel reference: {}", hotel_id)}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_stay_is_accepted() {
        let request = validate_booking("h1", "u1", "2026-11-02", "2026-11-05", " 3 ").unwrap();
        assert_eq!(request.hotel_id, "h1");
        assert_eq!(request.user_id, "u1");
        assert_eq!(request.guests, 3);
        assert_eq!(request.nights(), 3);
    }

    #[test]
    fn dates_are_required() {
        assert_eq!(
            validate_booking("h1", "u1", "", "2026-11-05", "2"),
            Err(BookingFormError::MissingCheckIn)
        );
        assert_eq!(
            validate_booking("h1", "u1", "2026-11-02", "  ", "2"),
            Err(BookingFormError::MissingCheckOut)
        );
    }

    #[test]
    fn check_out_must_follow_check_in() {
        assert_eq!(
            validate_booking("h1", "u1", "2026-11-05", "2026-11-05", "2"),
            Err(BookingFormError::CheckOutNotAfterCheckIn)
        );
        assert_eq!(
            validate_booking("h1", "u1", "2026-11-05", "2026-11-01", "2"),
            Err(BookingFormError::CheckOutNotAfterCheckIn)
        );
    }

    #[test]
    fn bad_dates_and_guest_counts_are_rejected() {
        assert_eq!(
            validate_booking("h1", "u1", "2026-13-01", "2026-11-05", "2"),
            Err(BookingFormError::InvalidDate("2026-13-01".to_string()))
        );
        for guests in ["0", "11", "two", ""] {
            assert_eq!(
                validate_booking("h1", "u1", "2026-11-02", "2026-11-05", guests),
                Err(BookingFormError::InvalidGuests),
                "guests {guests:?}"
            );
        }
    }
}

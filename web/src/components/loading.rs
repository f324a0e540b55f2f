use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn LoadingView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner size=SpinnerSize::Large />
            <p class="loading-message">
                {message.unwrap_or_else(|| "Loading, please wait...".to_string())}
            </p>
        </div>
    }
}

/// Placeholder shaped like the hotel details page.
#[component]
pub fn HotelDetailsSkeleton() -> impl IntoView {
    view! {
        <div class="hotel-skeleton" aria-busy="true">
            <div class="hotel-skeleton__hero">
                <Spinner size=SpinnerSize::Large />
            </div>
            <div class="hotel-skeleton__body">
                <div class="hotel-skeleton__line hotel-skeleton__line--title"></div>
                <div class="hotel-skeleton__line"></div>
                <div class="hotel-skeleton__line"></div>
                <div class="hotel-skeleton__line hotel-skeleton__line--short"></div>
                <div class="hotel-skeleton__button"></div>
            </div>
        </div>
    }
}

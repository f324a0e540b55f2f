use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::HotelRecord;

use crate::{
    components::{error::ErrorView, LoadingView, Navbar},
    server::list_hotels,
};

pub fn hotel_href(id: &str) -> String {
    format!("/hotels/{}", urlencoding::encode(id))
}

#[component]
fn HotelCard(hotel: HotelRecord) -> impl IntoView {
    view! {
        <A href=hotel_href(&hotel.id) attr:class="hotel-card">
            <img class="hotel-card__image" src=hotel.image.clone() alt=hotel.name.clone()/>
            <div class="hotel-card__body">
                <h3 class="hotel-card__name">{hotel.name.clone()}</h3>
                <span class="hotel-card__location">{hotel.location.clone()}</span>
            </div>
        </A>
    }
}

#[component]
pub fn HotelsPage() -> impl IntoView {
    let hotels = Resource::new(|| (), |_| async move { list_hotels().await });

    view! {
        <div class="hotel-page">
            <Navbar/>
            <main class="hotels-list">
                <h1 class="hotels-list__title">"Find your next stay"</h1>
                <Suspense fallback=move || view! {
                    <LoadingView message=Some("Loading hotels...".to_string()) />
                }>
                    {move || hotels.get().map(|result| match result {
                        Ok(hotels) if hotels.is_empty() => view! {
                            <p class="hotels-list__empty">"No hotels available right now."</p>
                        }.into_any(),
                        Ok(hotels) => view! {
                            <div class="hotels-list__grid">
                                {hotels.into_iter()
                                    .map(|hotel| view! { <HotelCard hotel=hotel/> })
                                    .collect_view()}
                            </div>
                        }.into_any(),
                        Err(e) => view! {
                            <ErrorView title="Could not load hotels" message=Some(e.to_string())/>
                        }.into_any(),
                    })}
                </Suspense>
            </main>
        </div>
    }
}

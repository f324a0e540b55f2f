use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::{
    components::{BookingModal, Footer, HotelDetailsSkeleton, Navbar},
    config::ViewConfig,
    hotel::{select_render, LoadingGate, ModalToggle, RenderBranch, ViewState},
    server::fetch_hotel,
    utils::auth::use_current_user,
};

#[component]
pub fn HotelDetailsPage(#[prop(optional)] config: ViewConfig) -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let current_user = use_current_user();

    let hotel_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let gate = RwSignal::new(LoadingGate::default());
    let modal = RwSignal::new(ModalToggle::default());
    let pending_timer = StoredValue::new(None::<TimeoutHandle>);

    let hotel_lookup = Resource::new(
        move || hotel_id.get(),
        move |id| async move {
            match fetch_hotel(id.clone()).await {
                Ok(hotel) => hotel,
                Err(e) => {
                    warn!("failed to load hotel {}: {}", id, e);
                    None
                }
            }
        },
    );

    // Every new id starts a fresh gate: back to the top, dialog closed,
    // skeleton up until the delay for this id elapses.
    Effect::new(move |_| {
        let _ = hotel_id.get();

        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }

        if let Some(handle) = pending_timer.get_value() {
            handle.clear();
        }
        modal.update(ModalToggle::close);
        let ticket = gate.write().activate();

        let handle = set_timeout_with_handle(
            move || {
                gate.try_update(|gate| gate.open(ticket));
            },
            config.loading_delay,
        )
        .ok();
        pending_timer.set_value(handle);
    });

    on_cleanup(move || {
        if let Some(handle) = pending_timer.try_get_value().flatten() {
            handle.clear();
        }
        gate.try_update(LoadingGate::cancel);
    });

    Effect::new(move |_| {
        log!("Logged-in user: {:?}", current_user.get());
    });

    let back_to_list = move |_: leptos::ev::MouseEvent| navigate("/hotels", Default::default());

    view! {
        <div class="hotel-page">
            <Navbar/>
            <main class="hotel-page__main">
                <Suspense fallback=move || view! { <HotelDetailsSkeleton/> }>
                    {move || {
                        // Page branch only; the dialog below tracks modal and user
                        // on its own so opening it does not rebuild the page.
                        let branch = select_render(
                            gate.with(LoadingGate::is_open),
                            hotel_lookup.get(),
                            false,
                            None,
                        );

                        match branch {
                            RenderBranch::Skeleton => view! { <HotelDetailsSkeleton/> }.into_any(),
                            RenderBranch::Fallback => view! {
                                <section class="hotel-not-found">
                                    <h2 class="hotel-not-found__title">"Hotel not found"</h2>
                                    <button class="btn-primary" on:click=back_to_list.clone()>
                                        "Back to Hotels"
                                    </button>
                                </section>
                            }.into_any(),
                            RenderBranch::Detail { hotel, .. } => {
                                let state = ViewState::Found(hotel.clone());
                                let shown = hotel.clone();
                                let dialog = move || {
                                    match select_render(
                                        true,
                                        Some(Some(shown.clone())),
                                        modal.with(ModalToggle::is_open),
                                        current_user.get().as_ref(),
                                    ) {
                                        RenderBranch::Detail { dialog, .. } => dialog,
                                        _ => None,
                                    }
                                };
                                let open_dialog = move |_: leptos::ev::MouseEvent| {
                                    modal.update(|modal| {
                                        modal.request_open(&state);
                                    });
                                };
                                let close_dialog = move || modal.update(ModalToggle::close);

                                view! {
                                    <div class="hotel-detail">
                                        <section class="hotel-hero">
                                            <img class="hotel-hero__image" src=hotel.image.clone() alt=hotel.name.clone()/>
                                            <div class="hotel-hero__overlay">
                                                <h1 class="hotel-hero__name">{hotel.name.clone()}</h1>
                                                <span class="hotel-hero__location">{hotel.location.clone()}</span>
                                            </div>
                                        </section>

                                        <section class="hotel-about">
                                            <h2 class="hotel-about__title">"About"</h2>
                                            <p class="hotel-about__description">{hotel.description.clone()}</p>

                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                class="hotel-about__cta"
                                                on_click=open_dialog
                                            >
                                                "Proceed to Book"
                                            </Button>

                                            {move || dialog().map(|dialog| view! {
                                                <BookingModal
                                                    hotel_id=dialog.hotel_id
                                                    user_id=dialog.user_id
                                                    on_close=close_dialog
                                                />
                                            })}
                                        </section>
                                    </div>
                                }.into_any()
                            }
                        }
                    }}
                </Suspense>
            </main>
            <Show when=move || config.show_footer>
                <Footer/>
            </Show>
        </div>
    }
}

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::Navbar;

/// Fallback for paths no route matches.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="hotel-page">
            <Navbar/>
            <main class="page-not-found">
                <div class="page-not-found__code">"404"</div>
                <h1 class="page-not-found__title">"Page Not Found"</h1>
                <p class="page-not-found__text">
                    "The page you're looking for doesn't exist or may have been moved."
                </p>
                <div class="page-not-found__actions">
                    <button
                        class="btn-primary"
                        on:click=move |_| navigate("/hotels", Default::default())
                    >
                        "Browse Hotels"
                    </button>
                    <button
                        class="btn-outlined"
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Err(e) = window.history().and_then(|history| history.back()) {
                                    leptos::logging::warn!("could not go back: {:?}", e);
                                }
                            }
                        }
                    >
                        "Go Back"
                    </button>
                </div>
            </main>
        </div>
    }
}

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::auth::use_current_user;

#[component]
pub fn Navbar() -> impl IntoView {
    let current_user = use_current_user();

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "StayFinder"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href="/hotels" attr:class="navbar__link">
                        "Hotels"
                    </A>
                    {move || current_user.get().map(|user| view! {
                        <span class="navbar__greeting">
                            {format!("Hi, {}", user.display_name())}
                        </span>
                    })}
                </div>
            </div>
        </nav>
    }
}

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__container">
                <span class="footer__brand">"StayFinder"</span>
                <A href="/hotels" attr:class="footer__link">
                    "All hotels"
                </A>
            </div>
        </footer>
    }
}

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::{
    config::ViewConfig,
    utils::auth::provide_auth_context,
    views::{hotel_details::HotelDetailsPage, hotels::HotelsPage, not_found::NotFoundPage},
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_auth_context();

    let view_config = ViewConfig::default();

    view! {
        <Stylesheet id="leptos" href="/pkg/web.css"/>
        <Title text="StayFinder"/>

        <ConfigProvider>
            <Router>
                <main>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HotelsPage/>
                        <Route path=StaticSegment("hotels") view=HotelsPage/>
                        <Route
                            path=(StaticSegment("hotels"), ParamSegment("id"))
                            view=move || view! { <HotelDetailsPage config=view_config/> }
                        />
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::config::AppConfig;
use crate::core::services::{IdProvider, UuidIdProvider};
use crate::pages::BoardPage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);
    provide_context::<Arc<dyn IdProvider>>(Arc::new(UuidIdProvider));

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=BoardPage />
                    <Route path=(StaticSegment("boards"), ParamSegment("id")) view=BoardPage />
                </Routes>
            </main>
        </Router>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::dispatch::AppState;
use crate::pages::{home::HomePage, shared::SharedBoardPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state context and sets up routing. The URL shape at
/// load decides the mode: `/` mounts the interactive view, `/board/{id}`
/// mounts the read-only shared view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/thumbboard.css"/>
        <Title text="ThumbBoard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("board"), ParamSegment("id")) view=SharedBoardPage/>
            </Routes>
        </Router>
    }
}

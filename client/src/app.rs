//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::layouts::{
    AccordionPage, CompactDashboardPage, DashboardPage, FloatingWidgetPage, SidebarPage, TabbedCardPage,
};
use crate::state::ui::UiState;
use crate::util::theme;

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
/// Provides the UI preferences context and one route per layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Stored theme is only readable in the browser; apply it after hydration.
    Effect::new(move || {
        let stored = theme::load();
        theme::apply(stored);
        ui.update(|u| u.theme = stored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/confluence-ai.css"/>
        <Title text="Confluence AI Assistant"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TabbedCardPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("widget") view=FloatingWidgetPage/>
                <Route path=StaticSegment("sidebar") view=SidebarPage/>
                <Route path=StaticSegment("accordion") view=AccordionPage/>
                <Route path=StaticSegment("compact") view=CompactDashboardPage/>
            </Routes>
        </Router>
    }
}

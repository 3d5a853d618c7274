//! Route pages, one per assistant layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is the shared header plus [`AssistantShell`] for one
//! [`ShellVariant`]. The overlay layouts (floating widget, sidebar) sit on
//! top of a stand-in Confluence page so they have something to float over.

use features::catalog::{SPACES, option_label};
use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::shell::AssistantShell;
use crate::state::shell::ShellVariant;
use crate::state::ui::UiState;

#[component]
fn LayoutPage(variant: ShellVariant, #[prop(optional)] overlay: bool) -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <div class="page__content">
                {overlay.then(|| view! { <ConfluenceBackdrop/> })}
                <AssistantShell variant/>
            </div>
        </div>
    }
}

/// Placeholder article the overlay layouts float over.
#[component]
fn ConfluenceBackdrop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let space = move || ui.with(|u| option_label(SPACES, &u.space));
    view! {
        <article class="backdrop">
            <p class="backdrop__crumbs">{space}</p>
            <h1 class="backdrop__title">"Product Requirements"</h1>
            <p class="backdrop__text">
                "This page collects requirements, decisions, and open questions for the next release. "
                "Use the AI assistant to search related pages, summarize attached recordings, review code, "
                "assess change impact, or draft a test plan."
            </p>
        </article>
    }
}

#[component]
pub fn TabbedCardPage() -> impl IntoView {
    view! { <LayoutPage variant=ShellVariant::TabbedCard/> }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <LayoutPage variant=ShellVariant::Dashboard/> }
}

#[component]
pub fn FloatingWidgetPage() -> impl IntoView {
    view! { <LayoutPage variant=ShellVariant::FloatingWidget overlay=true/> }
}

#[component]
pub fn SidebarPage() -> impl IntoView {
    view! { <LayoutPage variant=ShellVariant::Sidebar overlay=true/> }
}

#[component]
pub fn AccordionPage() -> impl IntoView {
    view! { <LayoutPage variant=ShellVariant::AccordionPage/> }
}

#[component]
pub fn CompactDashboardPage() -> impl IntoView {
    view! { <LayoutPage variant=ShellVariant::CompactDashboard/> }
}

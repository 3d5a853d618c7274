//! One assistant shell for all six layouts.
//!
//! ARCHITECTURE
//! ============
//! [`AssistantShell`] owns a `RwSignal<ShellState>` for its variant and
//! provides it as context, then renders chrome according to the variant's
//! [`Presentation`]. Navigation and panels are the same components in every
//! layout; only the surrounding markup differs.

use features::FeatureId;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::components::feature_nav::{FeatureAccordion, FeatureGrid, FeatureRail, FeatureTabs};
use crate::components::feature_view::FeatureView;
use crate::components::launcher::Launcher;
use crate::state::shell::{Presentation, ShellState, ShellVariant, feature_from_query};

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

#[component]
pub fn AssistantShell(variant: ShellVariant) -> impl IntoView {
    let query = use_query_map();
    let initial = query.with_untracked(|q| feature_from_query(q.get("feature").as_deref()));
    let shell = RwSignal::new(ShellState::with_feature(variant, initial));
    provide_context(shell);
    log::debug!("mounted {} shell", variant.label());

    match variant.presentation() {
        Presentation::Tabs => view! { <TabsShell compact={variant == ShellVariant::CompactDashboard}/> }.into_any(),
        Presentation::Accordion => view! { <AccordionShell/> }.into_any(),
        Presentation::Floating => view! { <FloatingShell/> }.into_any(),
        Presentation::FixedSidebar if variant == ShellVariant::Sidebar => view! { <CollapsibleSidebar/> }.into_any(),
        Presentation::FixedSidebar => view! { <DashboardShell/> }.into_any(),
    }
}

/// Active feature, changing only when the selection does. Chrome toggles
/// such as minimize or drag leave it untouched.
fn active_feature(shell: RwSignal<ShellState>) -> Memo<Option<FeatureId>> {
    Memo::new(move |_| shell.with(|s| s.active))
}

/// Re-mounts the panel whenever the active feature changes.
#[component]
fn ActivePanel() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let active = active_feature(shell);
    move || active.get().map(|feature| view! { <FeatureView feature/> })
}

#[component]
fn PanelTitle(feature: FeatureId) -> impl IntoView {
    let def = feature.def();
    view! {
        <div class="panel-title">
            <span aria-hidden="true">{def.icon}</span>
            <div>
                <h2 class="panel-title__name">{def.title}</h2>
                <p class="panel-title__text">{def.description}</p>
            </div>
        </div>
    }
}

#[component]
fn BackButton() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    view! {
        <button class="btn btn--ghost" on:click=move |_| shell.update(ShellState::back)>"← Back"</button>
    }
}

#[component]
fn TabsShell(compact: bool) -> impl IntoView {
    view! {
        <div class="card tabs-shell" class:tabs-shell--compact=compact>
            <FeatureTabs/>
            <div class="tabs-shell__body">
                <ActivePanel/>
            </div>
        </div>
    }
}

#[component]
fn AccordionShell() -> impl IntoView {
    view! {
        <div class="accordion-shell">
            <FeatureAccordion/>
        </div>
    }
}

#[component]
fn DashboardShell() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let active = active_feature(shell);
    view! {
        <div class="dashboard">
            <aside class="dashboard__nav">
                <FeatureRail/>
            </aside>
            <main class="dashboard__main">
                {move || active.get().map(|feature| view! { <PanelTitle feature/> })}
                <ActivePanel/>
            </main>
        </div>
    }
}

#[component]
fn CollapsibleSidebar() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let visible = move || shell.with(|s| s.visible);
    let panel_open = move || shell.with(ShellState::panel_visible);

    view! {
        <Launcher label="Open AI assistant"/>
        <Show when=visible>
            <aside class="sidebar" class:sidebar--expanded=panel_open>
                <div class="sidebar__head">
                    <span class="sidebar__title">"AI Assistant"</span>
                    <button class="btn btn--icon" title="Close" on:click=move |_| shell.update(ShellState::close)>"✕"</button>
                </div>
                <Show when=panel_open fallback=|| view! { <FeatureRail/> }>
                    <BackButton/>
                    <ActivePanel/>
                </Show>
            </aside>
        </Show>
    }
}

#[component]
fn FloatingShell() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let visible = move || shell.with(|s| s.visible);
    let minimized = move || shell.with(|s| s.minimized);
    let has_panel = move || shell.with(|s| s.active.is_some());

    let dragging = RwSignal::new(false);
    let last_pointer = RwSignal::new((0.0_f64, 0.0_f64));

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        dragging.set(true);
        last_pointer.set((f64::from(ev.client_x()), f64::from(ev.client_y())));
        #[cfg(feature = "hydrate")]
        {
            if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !dragging.get_untracked() {
            return;
        }
        let (px, py) = last_pointer.get_untracked();
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        last_pointer.set((x, y));
        shell.update(|s| s.drag(x - px, y - py));
    };
    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| dragging.set(false);

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && shell.try_update(ShellState::escape).unwrap_or(false) {
            log::debug!("floating widget closed with Escape");
        }
    });
    on_cleanup(move || escape.remove());

    let card_style = move || {
        let (x, y) = shell.with(|s| s.position);
        format!("transform: translate({x:.0}px, {y:.0}px);")
    };

    view! {
        <Launcher label="Open AI assistant"/>
        <Show when=visible>
            <div class="floating" style=card_style>
                <div
                    class="floating__head"
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointercancel=on_pointer_up
                >
                    <span class="floating__title">"AI Assistant"</span>
                    <button
                        class="btn btn--icon"
                        title=move || if minimized() { "Restore" } else { "Minimize" }
                        on:click=move |_| shell.update(ShellState::toggle_minimized)
                    >
                        {move || if minimized() { "▢" } else { "–" }}
                    </button>
                    <button class="btn btn--icon" title="Close" on:click=move |_| shell.update(ShellState::close)>"✕"</button>
                </div>
                // Minimizing only hides the body so a running panel keeps its state.
                <div class="floating__body" class:floating__body--hidden=minimized>
                    <Show when=has_panel fallback=|| view! { <FeatureGrid/> }>
                        <BackButton/>
                        <ActivePanel/>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

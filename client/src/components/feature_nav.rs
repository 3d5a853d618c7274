//! Feature navigation in the four shapes the shells use.
//!
//! ARCHITECTURE
//! ============
//! Navigation reads and writes the shell's `RwSignal<ShellState>` from
//! context. Every shape ends in `ShellState::select_feature` or
//! `ShellState::toggle_section`, so the layouts share one selection model.

use features::{FEATURES, FeatureDef, FeatureId};
use leptos::prelude::*;

use crate::components::feature_view::FeatureView;
use crate::state::shell::ShellState;

fn is_active(shell: RwSignal<ShellState>, id: FeatureId) -> bool {
    shell.with(|s| s.active == Some(id))
}

/// Horizontal tab strip.
#[component]
pub fn FeatureTabs() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    view! {
        <nav class="tabs" role="tablist">
            {FEATURES
                .iter()
                .map(|def| {
                    let id = def.id;
                    view! {
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || is_active(shell, id)
                            role="tab"
                            on:click=move |_| shell.update(|s| s.select_feature(id))
                        >
                            <span aria-hidden="true">{def.icon}</span>
                            <span>{def.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Vertical rail of labelled buttons.
#[component]
pub fn FeatureRail() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    view! {
        <nav class="rail">
            {FEATURES
                .iter()
                .map(|def| {
                    let id = def.id;
                    view! {
                        <button
                            class="rail__item"
                            class:rail__item--active=move || is_active(shell, id)
                            title=def.description
                            on:click=move |_| shell.update(|s| s.select_feature(id))
                        >
                            <span class="rail__icon" aria-hidden="true">{def.icon}</span>
                            <span class="rail__label">{def.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Grid of feature cards, used where no panel is open yet.
#[component]
pub fn FeatureGrid() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    view! {
        <div class="feature-grid">
            {FEATURES.iter().map(|def| view! { <FeatureCard def shell/> }).collect_view()}
        </div>
    }
}

#[component]
fn FeatureCard(def: &'static FeatureDef, shell: RwSignal<ShellState>) -> impl IntoView {
    let id = def.id;
    view! {
        <button class="feature-card" on:click=move |_| shell.update(|s| s.select_feature(id))>
            <span class="feature-card__icon" aria-hidden="true">{def.icon}</span>
            <span class="feature-card__title">{def.title}</span>
            <span class="feature-card__text">{def.description}</span>
        </button>
    }
}

/// Stacked sections. Opening one closes the rest; clicking the open one
/// collapses it.
#[component]
pub fn FeatureAccordion() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    view! {
        <div class="accordion">
            {FEATURES
                .iter()
                .map(|def| {
                    let id = def.id;
                    let open = move || is_active(shell, id);
                    view! {
                        <div class="accordion__section" class:accordion__section--open=open>
                            <button
                                class="accordion__header"
                                attr:aria-expanded=move || open().to_string()
                                on:click=move |_| shell.update(|s| s.toggle_section(id))
                            >
                                <span aria-hidden="true">{def.icon}</span>
                                <span class="accordion__title">{def.title}</span>
                                <span class="accordion__text">{def.description}</span>
                                <span class="accordion__chevron" aria-hidden="true">{move || if open() { "▾" } else { "▸" }}</span>
                            </button>
                            <Show when=open>
                                <div class="accordion__body">
                                    <FeatureView feature=id/>
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

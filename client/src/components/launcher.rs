//! Round button that reopens a closed floating widget or sidebar.

use leptos::prelude::*;

use crate::state::shell::ShellState;

#[component]
pub fn Launcher(label: &'static str) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    view! {
        <Show when=move || !shell.with(|s| s.visible)>
            <button class="launcher" title=label on:click=move |_| shell.update(ShellState::open)>
                <span aria-hidden="true">"✨"</span>
            </button>
        </Show>
    }
}

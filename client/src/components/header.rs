//! Top bar: workspace selectors, layout switcher, theme toggle.

use features::catalog::{SPACE_PAGES, SPACES};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::select::OptionSelect;
use crate::state::shell::ShellVariant;
use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        let next = ui.with_untracked(|u| u.theme.toggled());
        theme::apply(next);
        theme::store(next);
        ui.update(|u| u.theme = next);
    };

    view! {
        <header class="header">
            <div class="header__brand">
                <span class="header__logo" aria-hidden="true">"✨"</span>
                <span class="header__title">"Confluence AI Assistant"</span>
            </div>
            <div class="header__selectors">
                <OptionSelect
                    options=SPACES
                    value=Signal::derive(move || ui.with(|u| u.space.clone()))
                    on_change=Callback::new(move |v: String| ui.update(|u| u.space = v))
                    class="header__select"
                />
                <OptionSelect
                    options=SPACE_PAGES
                    value=Signal::derive(move || ui.with(|u| u.space_page.clone()))
                    on_change=Callback::new(move |v: String| ui.update(|u| u.space_page = v))
                    class="header__select"
                />
            </div>
            <nav class="header__layouts">
                {ShellVariant::ALL
                    .into_iter()
                    .map(|v| view! { <A href=v.path() attr:class="header__layout">{v.label()}</A> })
                    .collect_view()}
            </nav>
            <button class="btn btn--icon" title="Toggle theme" on:click=on_toggle_theme>
                {move || ui.with(|u| u.theme.toggle_icon())}
            </button>
        </header>
    }
}

//! `<select>` bound to a static option table.

use features::catalog::SelectOptions;
use leptos::prelude::*;

#[component]
pub fn OptionSelect(
    options: SelectOptions,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] class: &'static str,
    /// Leading empty option shown while nothing is chosen.
    #[prop(optional)]
    placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <select
            class=format!("select {class}")
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {placeholder.map(|text| view! { <option value="" selected=move || value.with(String::is_empty)>{text}</option> })}
            {options
                .iter()
                .map(|&(v, label)| view! { <option value=v selected=move || value.get() == v>{label}</option> })
                .collect_view()}
        </select>
    }
}

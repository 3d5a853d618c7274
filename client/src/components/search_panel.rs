//! AI search over a hand-picked set of Confluence pages.

use features::catalog::PAGES;
use features::{FeatureId, SearchInput};
use leptos::prelude::*;

use crate::components::feature_panel::{BusyIndicator, EmptyState, ExportBar, use_panel};

#[component]
pub fn SearchPanel() -> impl IntoView {
    let panel = use_panel(SearchInput::default());

    let page_rows = PAGES
        .iter()
        .map(|page| {
            let id = page.id;
            view! {
                <label class="page-pick">
                    <input
                        type="checkbox"
                        prop:checked=move || panel.input.with(|i| i.is_selected(id))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            panel.edit(|i| i.set_page(id, checked));
                        }
                    />
                    <span class="page-pick__title">{page.title}</span>
                    <span class="page-pick__meta">{format!("{} · {}", page.space, page.last_updated)}</span>
                </label>
            }
        })
        .collect_view();

    let answer_text = Signal::derive(move || panel.result.get().map(|r| r.answer).unwrap_or_default());

    view! {
        <section class="feature-panel feature-panel--search">
            <div class="feature-panel__form">
                <textarea
                    class="input"
                    placeholder="Ask a question about your documentation..."
                    prop:value=move || panel.input.with(|i| i.query.clone())
                    on:input=move |ev| panel.edit(|i| i.query = event_target_value(&ev))
                ></textarea>
                <div class="page-picker">
                    <span class="page-picker__label">
                        {move || format!("Search in pages ({} selected)", panel.input.with(|i| i.selected_pages.len()))}
                    </span>
                    {page_rows}
                </div>
                <button class="btn btn--primary" disabled=move || !panel.can_trigger() on:click=move |_| panel.trigger()>
                    {move || if panel.is_busy() { "Searching..." } else { "Search" }}
                </button>
            </div>

            <Show when=move || panel.is_busy()>
                <BusyIndicator progress=Signal::derive(move || panel.progress()) label="Searching selected pages"/>
            </Show>

            {move || match panel.result.get() {
                None => view! { <EmptyState feature=FeatureId::Search/> }.into_any(),
                Some(result) => view! {
                    <div class="result">
                        <p class="result__headline">{result.headline}</p>
                        <p class="result__body">{result.answer}</p>
                        <div class="result__meta">
                            <span class="badge badge--secondary">{format!("{}% confidence", result.confidence)}</span>
                        </div>
                        <h4 class="result__heading">"Sources"</h4>
                        <ul class="result__list">
                            {result
                                .sources
                                .into_iter()
                                .map(|s| view! { <li><strong>{s.title}</strong>" · "{s.space}</li> })
                                .collect_view()}
                        </ul>
                        <h4 class="result__heading">"Related topics"</h4>
                        <div class="chips">
                            {result
                                .related_topics
                                .into_iter()
                                .map(|t| view! { <span class="chip">{t}</span> })
                                .collect_view()}
                        </div>
                        <ExportBar export=panel.exporter() copy_text=answer_text/>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

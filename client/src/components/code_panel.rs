//! Code assistant: review suggestions, quality metrics, optimized snippet.

use features::catalog::LANGUAGES;
use features::{CodeAnalysis, CodeInput, FeatureId};
use leptos::prelude::*;

use crate::components::feature_panel::{BusyIndicator, EmptyState, ExportBar, LevelBadge, use_panel};
use crate::components::select::OptionSelect;

#[component]
pub fn CodePanel() -> impl IntoView {
    let panel = use_panel(CodeInput::default());

    let optimized = Signal::derive(move || panel.result.get().map(|r| r.optimized_code).unwrap_or_default());

    view! {
        <section class="feature-panel feature-panel--code">
            <div class="feature-panel__form">
                <OptionSelect
                    options=LANGUAGES
                    value=Signal::derive(move || panel.input.with(|i| i.language.clone()))
                    on_change=Callback::new(move |v: String| panel.edit(|i| i.language = v))
                />
                <textarea
                    class="input input--mono"
                    rows="10"
                    placeholder="Paste your code here..."
                    prop:value=move || panel.input.with(|i| i.code.clone())
                    on:input=move |ev| panel.edit(|i| i.code = event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" disabled=move || !panel.can_trigger() on:click=move |_| panel.trigger()>
                    {move || if panel.is_busy() { "Analyzing..." } else { "Analyze code" }}
                </button>
            </div>

            <Show when=move || panel.is_busy()>
                <BusyIndicator progress=Signal::derive(move || panel.progress()) label="Analyzing code"/>
            </Show>

            {move || match panel.result.get() {
                None => view! { <EmptyState feature=FeatureId::Code/> }.into_any(),
                Some(analysis) => view! {
                    <CodeAnalysisView analysis/>
                    <ExportBar export=panel.exporter() copy_text=optimized/>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn CodeAnalysisView(analysis: CodeAnalysis) -> impl IntoView {
    let m = analysis.metrics;
    let metrics = [
        ("Complexity", m.complexity),
        ("Maintainability", m.maintainability),
        ("Security", m.security),
        ("Performance", m.performance),
    ];

    view! {
        <div class="result">
            <div class="metrics">
                {metrics
                    .into_iter()
                    .map(|(label, score)| view! {
                        <div class="metric">
                            <span class="metric__value">{score}</span>
                            <span class="metric__label">{label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
            <h4 class="result__heading">"Suggestions"</h4>
            <ul class="suggestions">
                {analysis
                    .suggestions
                    .into_iter()
                    .map(|s| view! {
                        <li class="suggestion">
                            <div class="suggestion__head">
                                <span class="chip">{s.kind}</span>
                                <strong>{s.title}</strong>
                                <LevelBadge level=s.priority/>
                            </div>
                            <p class="suggestion__body">{s.description}</p>
                            <span class="suggestion__line">{format!("Line {}", s.line)}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <h4 class="result__heading">"Optimized code"</h4>
            <pre class="code-block"><code>{analysis.optimized_code}</code></pre>
        </div>
    }
}

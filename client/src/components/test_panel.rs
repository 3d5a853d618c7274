//! Test support: generated test cases, automation skeleton, run metrics.

use features::catalog::TEST_TYPES;
use features::{FeatureId, TestInput, TestPlan};
use leptos::prelude::*;

use crate::components::feature_panel::{BusyIndicator, EmptyState, ExportBar, LevelBadge, use_panel};
use crate::components::select::OptionSelect;

#[component]
pub fn TestPanel() -> impl IntoView {
    let panel = use_panel(TestInput::default());

    let automation = Signal::derive(move || panel.result.get().map(|r| r.automation.code).unwrap_or_default());

    view! {
        <section class="feature-panel feature-panel--testing">
            <div class="feature-panel__form">
                <input
                    class="input"
                    placeholder="Feature name, e.g. User Authentication"
                    prop:value=move || panel.input.with(|i| i.feature.clone())
                    on:input=move |ev| panel.edit(|i| i.feature = event_target_value(&ev))
                />
                <OptionSelect
                    options=TEST_TYPES
                    value=Signal::derive(move || panel.input.with(|i| i.test_type.clone()))
                    on_change=Callback::new(move |v: String| panel.edit(|i| i.test_type = v))
                />
                <textarea
                    class="input"
                    rows="4"
                    placeholder="Requirements or acceptance criteria (optional)"
                    prop:value=move || panel.input.with(|i| i.requirements.clone())
                    on:input=move |ev| panel.edit(|i| i.requirements = event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" disabled=move || !panel.can_trigger() on:click=move |_| panel.trigger()>
                    {move || if panel.is_busy() { "Generating..." } else { "Generate test plan" }}
                </button>
            </div>

            <Show when=move || panel.is_busy()>
                <BusyIndicator progress=Signal::derive(move || panel.progress()) label="Generating test plan"/>
            </Show>

            {move || match panel.result.get() {
                None => view! { <EmptyState feature=FeatureId::Testing/> }.into_any(),
                Some(plan) => view! {
                    <TestPlanView plan/>
                    <ExportBar export=panel.exporter() copy_text=automation/>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn TestPlanView(plan: TestPlan) -> impl IntoView {
    let m = plan.metrics;
    let counts = [("Total", m.total), ("Passed", m.passed), ("Failed", m.failed), ("Pending", m.pending)];
    let auto = plan.automation;

    view! {
        <div class="result">
            <div class="metrics">
                {counts
                    .into_iter()
                    .map(|(label, n)| view! {
                        <div class="metric">
                            <span class="metric__value">{n}</span>
                            <span class="metric__label">{label}</span>
                        </div>
                    })
                    .collect_view()}
                <div class="metric">
                    <span class="metric__value">{format!("{}%", m.coverage)}</span>
                    <span class="metric__label">"Coverage"</span>
                </div>
            </div>

            <h4 class="result__heading">"Test cases"</h4>
            <ul class="cases">
                {plan
                    .test_cases
                    .into_iter()
                    .map(|c| view! {
                        <li class="case">
                            <div class="case__head">
                                <span class="case__id">{c.id}</span>
                                <strong>{c.title}</strong>
                                <LevelBadge level=c.priority/>
                                <span class="chip">{c.kind}</span>
                                <span class="badge badge--outline">{c.status}</span>
                            </div>
                            <ol class="case__steps">
                                {c.steps.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                            </ol>
                            <p class="case__expected">"Expected: "{c.expected_result}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>

            <h4 class="result__heading">"Automation"</h4>
            <p class="result__meta">
                {format!("{} · {} coverage · {}", auto.framework, auto.coverage, auto.execution_time)}
            </p>
            <pre class="code-block"><code>{auto.code}</code></pre>
        </div>
    }
}

//! Change impact analyzer: free-text changes, recent code changes with a
//! before/after view, and document version comparison.

use features::catalog::{CHANGE_TYPES, CODE_CHANGES, DOC_VERSIONS};
use features::{CodeDiff, FeatureId, ImpactAnalysis, ImpactInput, VersionComparison};
use leptos::prelude::*;

use crate::components::feature_panel::{BusyIndicator, EmptyState, ExportBar, LevelBadge, use_panel};
use crate::components::select::OptionSelect;

#[cfg(test)]
#[path = "impact_panel_test.rs"]
mod impact_panel_test;

#[component]
pub fn ImpactPanel() -> impl IntoView {
    let panel = use_panel(ImpactInput::default());

    let report = Signal::derive(move || panel.result.get().map(|r| plain_report(&r)).unwrap_or_default());

    view! {
        <section class="feature-panel feature-panel--impact">
            <div class="feature-panel__form">
                <span class="page-picker__label">"Recent code changes"</span>
                <div class="changes">
                    {CODE_CHANGES
                        .iter()
                        .map(|change| {
                            let id = change.id;
                            view! {
                                <button
                                    class="change"
                                    class:change--active=move || panel.input.with(|i| i.change_id.as_deref() == Some(id))
                                    on:click=move |_| panel.edit(|i| i.pick_change(id))
                                >
                                    <span class="change__title">{change.title}</span>
                                    <span class="change__text">{change.description}</span>
                                    <span class="change__meta">
                                        <LevelBadge level=change.risk/>
                                        {format!("{} areas · {} files", change.affected_areas, change.files.len())}
                                    </span>
                                    <span class="change__meta">{format!("{} · {}", change.author, change.timestamp)}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="versions">
                    <OptionSelect
                        options=DOC_VERSIONS
                        placeholder="Select older version"
                        value=Signal::derive(move || panel.input.with(|i| i.old_version.clone()))
                        on_change=Callback::new(move |v: String| panel.edit(|i| i.old_version = v))
                    />
                    <OptionSelect
                        options=DOC_VERSIONS
                        placeholder="Select newer version"
                        value=Signal::derive(move || panel.input.with(|i| i.new_version.clone()))
                        on_change=Callback::new(move |v: String| panel.edit(|i| i.new_version = v))
                    />
                </div>
                <OptionSelect
                    options=CHANGE_TYPES
                    value=Signal::derive(move || panel.input.with(|i| i.change_type.clone()))
                    on_change=Callback::new(move |v: String| panel.edit(|i| i.change_type = v))
                />
                <textarea
                    class="input"
                    rows="5"
                    placeholder="Describe the proposed change..."
                    prop:value=move || panel.input.with(|i| i.change_description.clone())
                    on:input=move |ev| panel.edit(|i| i.change_description = event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" disabled=move || !panel.can_trigger() on:click=move |_| panel.trigger()>
                    {move || if panel.is_busy() { "Analyzing..." } else { "Analyze impact" }}
                </button>
            </div>

            <Show when=move || panel.is_busy()>
                <BusyIndicator progress=Signal::derive(move || panel.progress()) label="Analyzing impact"/>
            </Show>

            {move || match panel.result.get() {
                None => view! { <EmptyState feature=FeatureId::Impact/> }.into_any(),
                Some(analysis) => view! {
                    <ImpactView analysis/>
                    <ExportBar export=panel.exporter() copy_text=report/>
                }
                .into_any(),
            }}
        </section>
    }
}

fn push_bullets(out: &mut String, heading: &str, items: &[String]) {
    out.push('\n');
    out.push_str(heading);
    out.push_str(":\n");
    for item in items {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
}

/// Text form of an analysis for the clipboard.
fn plain_report(a: &ImpactAnalysis) -> String {
    let mut out = format!("Overall impact: {}\nRisk level: {}\n", a.overall_impact, a.risk_level);
    push_bullets(&mut out, "Recommendations", &a.recommendations);
    if let Some(diff) = &a.code_diff {
        push_bullets(&mut out, &format!("Key changes ({})", diff.change_id), &diff.key_changes);
    }
    if let Some(cmp) = &a.version_comparison {
        push_bullets(&mut out, &format!("Breaking changes {} -> {}", cmp.old_version, cmp.new_version), &cmp.breaking_changes);
    }
    out
}

/// Layout of the before/after code view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DiffMode {
    #[default]
    SideBySide,
    Unified,
}

impl DiffMode {
    fn label(self) -> &'static str {
        match self {
            Self::SideBySide => "Side-by-Side",
            Self::Unified => "Unified View",
        }
    }
}

#[component]
fn CodeDiffView(diff: CodeDiff) -> impl IntoView {
    let mode = RwSignal::new(DiffMode::default());
    let CodeDiff { files, before, after, key_changes, .. } = diff;

    view! {
        <h4 class="result__heading">"Code changes"</h4>
        <div class="chips">{files.into_iter().map(|f| view! { <span class="chip">{f}</span> }).collect_view()}</div>
        <nav class="tabs" role="tablist">
            {[DiffMode::SideBySide, DiffMode::Unified]
                .into_iter()
                .map(|m| view! {
                    <button
                        class="tabs__tab"
                        class:tabs__tab--active=move || mode.get() == m
                        role="tab"
                        on:click=move |_| mode.set(m)
                    >
                        {m.label()}
                    </button>
                })
                .collect_view()}
        </nav>
        <div class="diff" class:diff--hidden=move || mode.get() != DiffMode::SideBySide>
            <div class="diff__side diff__side--before">
                <span class="badge badge--destructive">"Before"</span>
                <pre class="code-block"><code>{before}</code></pre>
            </div>
            <div class="diff__side diff__side--after">
                <span class="badge badge--secondary">"After"</span>
                <pre class="code-block"><code>{after}</code></pre>
            </div>
        </div>
        <ul class="result__list" class:diff--hidden=move || mode.get() != DiffMode::Unified>
            {key_changes.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
        </ul>
    }
}

#[component]
fn VersionComparisonView(cmp: VersionComparison) -> impl IntoView {
    let counts = [
        ("Lines added", cmp.lines_added),
        ("Lines removed", cmp.lines_removed),
        ("Lines modified", cmp.lines_modified),
        ("Files changed", cmp.files_changed),
    ];
    view! {
        <h4 class="result__heading">{format!("{} → {}", cmp.old_version, cmp.new_version)}</h4>
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
        </div>
        <h4 class="result__heading">"Breaking changes"</h4>
        <ul class="result__list">
            {cmp.breaking_changes.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
        </ul>
    }
}

#[component]
fn ImpactView(analysis: ImpactAnalysis) -> impl IntoView {
    let t = analysis.timeline;
    let phases = [
        ("Planning", t.planning),
        ("Development", t.development),
        ("Testing", t.testing),
        ("Deployment", t.deployment),
    ];

    view! {
        <div class="result">
            <div class="result__meta">
                <span>"Overall impact "</span>
                <LevelBadge level=analysis.overall_impact/>
                <span>"Risk "</span>
                <LevelBadge level=analysis.risk_level/>
            </div>

            <h4 class="result__heading">"Affected systems"</h4>
            <table class="table">
                <tbody>
                    {analysis
                        .affected_systems
                        .into_iter()
                        .map(|s| view! {
                            <tr>
                                <td>{s.name}</td>
                                <td><LevelBadge level=s.risk/></td>
                                <td>{s.impact}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>

            <h4 class="result__heading">"Stakeholders"</h4>
            <ul class="result__list">
                {analysis
                    .stakeholders
                    .into_iter()
                    .map(|s| view! {
                        <li>
                            <strong>{s.role}</strong>" "
                            <LevelBadge level=s.impact/>
                            " "{s.action}
                        </li>
                    })
                    .collect_view()}
            </ul>

            <h4 class="result__heading">"Timeline"</h4>
            <div class="timeline">
                {phases
                    .into_iter()
                    .map(|(label, span)| view! {
                        <div class="timeline__phase">
                            <span class="timeline__label">{label}</span>
                            <span class="timeline__span">{span}</span>
                        </div>
                    })
                    .collect_view()}
                <div class="timeline__phase timeline__phase--total">
                    <span class="timeline__label">"Total"</span>
                    <span class="timeline__span">{t.total}</span>
                </div>
            </div>

            <h4 class="result__heading">"Recommendations"</h4>
            <ul class="result__list">
                {analysis.recommendations.into_iter().map(|r| view! { <li>{r}</li> }).collect_view()}
            </ul>
            <h4 class="result__heading">"Dependencies"</h4>
            <div class="chips">
                {analysis.dependencies.into_iter().map(|d| view! { <span class="chip">{d}</span> }).collect_view()}
            </div>
            {analysis.code_diff.map(|diff| view! { <CodeDiffView diff/> })}
            {analysis.version_comparison.map(|cmp| view! { <VersionComparisonView cmp/> })}
        </div>
    }
}

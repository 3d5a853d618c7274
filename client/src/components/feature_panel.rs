//! Run wiring and shared chrome for the five feature panels.
//!
//! ARCHITECTURE
//! ============
//! [`use_panel`] gives a panel component its form signal, its run state, and
//! the handle of its pending simulated run. The handle lives in a
//! `StoredValue` owned by the component, so unmounting the panel (switching
//! features, closing a widget) drops the handle and aborts the run. Writes
//! that still race the abort carry a stale ticket and are ignored.
//!
//! Result views read [`PanelHandle::result`], a memo that only changes when
//! a run completes. Progress ticks during a re-run leave the shown result
//! and everything mounted under it alone.

use features::catalog::ExportFormat;
use features::{BadgeVariant, ExportRequest, ExportTarget, FeatureId, FeatureInput, badge_for_level};
use leptos::prelude::*;

use crate::state::panel::{PanelPhase, PanelState, TriggerRejected};
use crate::util::clipboard;
use crate::util::mock_task::PendingTask;

#[cfg(test)]
#[path = "feature_panel_test.rs"]
mod feature_panel_test;

/// Reactive handles for one mounted feature panel.
pub struct PanelHandle<I>
where
    I: FeatureInput + Clone + Send + Sync + 'static,
    I::Output: Send + Sync,
{
    pub input: RwSignal<I>,
    pub state: RwSignal<PanelState<I::Output>>,
    /// Latest completed result.
    pub result: Memo<Option<I::Output>>,
    task: StoredValue<Option<PendingTask>>,
}

impl<I> Clone for PanelHandle<I>
where
    I: FeatureInput + Clone + Send + Sync + 'static,
    I::Output: Send + Sync,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for PanelHandle<I>
where
    I: FeatureInput + Clone + Send + Sync + 'static,
    I::Output: Send + Sync,
{
}

/// Create the panel's signals under the current owner.
pub fn use_panel<I>(initial: I) -> PanelHandle<I>
where
    I: FeatureInput + Clone + Send + Sync + 'static,
    I::Output: Send + Sync,
{
    let state = RwSignal::new(PanelState::default());
    let handle = PanelHandle {
        input: RwSignal::new(initial),
        state,
        result: Memo::new(move |_| state.with(|s| s.result().cloned())),
        task: StoredValue::new(None),
    };
    on_cleanup(move || {
        handle.state.try_update(PanelState::cancel);
        if let Some(task) = handle.task.try_update_value(Option::take).flatten() {
            log::debug!("{}: panel unmounted, pending run aborted", task.feature());
        }
    });
    handle
}

impl<I> PanelHandle<I>
where
    I: FeatureInput + Clone + Send + Sync + 'static,
    I::Output: Send + Sync,
{
    /// Whether the trigger control should be enabled.
    pub fn can_trigger(self) -> bool {
        self.input.with(I::is_ready) && !self.state.with(PanelState::is_busy)
    }

    pub fn is_busy(self) -> bool {
        self.state.with(PanelState::is_busy)
    }

    pub fn phase(self) -> PanelPhase {
        self.state.with(PanelState::phase)
    }

    pub fn progress(self) -> u8 {
        self.state.with(PanelState::progress)
    }

    /// Start a simulated run with the current form contents.
    pub fn trigger(self) {
        let input = self.input.get_untracked();
        let Some(outcome) = self.state.try_update(|s| s.begin(&input)) else {
            return;
        };
        #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
        let ticket = match outcome {
            Ok(ticket) => ticket,
            Err(TriggerRejected::Invalid(err)) => {
                log::debug!("{}: trigger ignored: {err}", I::FEATURE);
                return;
            }
            Err(TriggerRejected::Busy) => {
                log::debug!("{}: trigger ignored while busy", I::FEATURE);
                return;
            }
        };
        log::info!("{}: run started ({} ms)", I::FEATURE, I::delay().as_millis());

        #[cfg(feature = "hydrate")]
        {
            use crate::util::mock_task::{abortable, simulate};

            let state = self.state;
            let run = async move {
                let result = simulate(input, gloo_timers::future::sleep, move |pct| {
                    state.try_update(|s| s.report_progress(ticket, pct));
                })
                .await;
                let written = state.try_update(|s| s.complete(ticket, result)).unwrap_or(false);
                if written {
                    log::info!("{}: run complete", I::FEATURE);
                } else {
                    log::debug!("{}: stale completion dropped", I::FEATURE);
                }
            };
            let (run, task) = abortable(I::FEATURE, run);
            self.task.set_value(Some(task));
            leptos::task::spawn_local(async move {
                if run.await.is_err() {
                    log::debug!("{}: run aborted", I::FEATURE);
                }
            });
        }
    }

    /// Replace the form contents.
    pub fn edit(self, f: impl FnOnce(&mut I)) {
        self.input.update(f);
    }

    /// Export payload for the shown result, `None` before the first run.
    pub fn export_json(self, target: ExportTarget, format: ExportFormat) -> Option<serde_json::Value> {
        self.result.with_untracked(|result| {
            let result = result.as_ref()?;
            let request = ExportRequest { feature: I::FEATURE, target, format, result };
            request.to_json().map_err(|e| log::warn!("{}: export payload failed: {e}", I::FEATURE)).ok()
        })
    }

    /// [`Self::export_json`] as a callback for [`ExportBar`].
    pub fn exporter(self) -> Callback<(ExportTarget, ExportFormat), Option<serde_json::Value>> {
        Callback::new(move |(target, format)| self.export_json(target, format))
    }
}

/// Progress bar and caption shown while a run is pending.
#[component]
pub fn BusyIndicator(#[prop(into)] progress: Signal<u8>, label: &'static str) -> impl IntoView {
    view! {
        <div class="busy" role="status">
            <div class="busy__caption">
                <span class="busy__spinner" aria-hidden="true"></span>
                <span>{label}</span>
                <span class="busy__percent">{move || format!("{}%", progress.get())}</span>
            </div>
            <div class="busy__track">
                <div class="busy__fill" style:width=move || format!("{}%", progress.get())></div>
            </div>
        </div>
    }
}

/// Placeholder rendered before the first run.
#[component]
pub fn EmptyState(feature: FeatureId) -> impl IntoView {
    let def = feature.def();
    view! {
        <div class="empty-state">
            <span class="empty-state__icon" aria-hidden="true">{def.icon}</span>
            <p class="empty-state__text">{def.description}</p>
        </div>
    }
}

/// Pill coloured by a risk or priority level.
#[component]
pub fn LevelBadge(#[prop(into)] level: String) -> impl IntoView {
    let variant: BadgeVariant = badge_for_level(&level);
    view! { <span class=format!("badge {}", variant.class())>{level}</span> }
}

/// Export format picker plus the Download, Save, and Copy actions.
///
/// Download and Save have no backend and only log the request payload.
/// Copy writes `copy_text` to the clipboard.
#[component]
pub fn ExportBar(
    export: Callback<(ExportTarget, ExportFormat), Option<serde_json::Value>>,
    #[prop(into)] copy_text: Signal<String>,
) -> impl IntoView {
    let format = RwSignal::new(ExportFormat::default());
    let copied = RwSignal::new(false);

    let request = move |target: ExportTarget| match export.run((target, format.get_untracked())) {
        Some(payload) => log::info!("export requested (no backend): {payload}"),
        None => log::debug!("export requested with nothing to export"),
    };
    let on_copy = move |_| {
        clipboard::copy_text(&copy_text.get_untracked());
        copied.set(true);
    };

    view! {
        <div class="export-bar">
            <select
                class="export-bar__format"
                on:change=move |ev| format.set(ExportFormat::from_value(&event_target_value(&ev)))
            >
                {ExportFormat::ALL
                    .into_iter()
                    .map(|f| view! { <option value=f.as_str() selected=move || format.get() == f>{f.label()}</option> })
                    .collect_view()}
            </select>
            <button class="btn btn--outline" on:click=move |_| request(ExportTarget::Download)>"Download"</button>
            <button class="btn btn--outline" on:click=move |_| request(ExportTarget::Confluence)>"Save to Confluence"</button>
            <button class="btn btn--outline" on:click=on_copy>
                {move || if copied.get() { "Copied" } else { "Copy" }}
            </button>
        </div>
    }
}

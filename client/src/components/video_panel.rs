//! Video summarizer with a simulated voice follow-up question.

use features::catalog::VIDEOS;
use features::{FeatureId, VideoInput, VideoSummary};
use leptos::prelude::*;

use crate::components::feature_panel::{BusyIndicator, EmptyState, ExportBar, use_panel};
use crate::util::mock_task::PendingTask;

#[component]
pub fn VideoPanel() -> impl IntoView {
    let panel = use_panel(VideoInput::default());

    let attachments = VIDEOS
        .iter()
        .map(|video| {
            let url = format!("confluence://attachments/{}", video.id);
            let pick_url = url.clone();
            view! {
                <button
                    class="attachment"
                    class:attachment--active=move || panel.input.with(|i| i.video_url == url)
                    on:click=move |_| panel.edit(|i| i.video_url.clone_from(&pick_url))
                >
                    <span class="attachment__title">{video.title}</span>
                    <span class="attachment__meta">{format!("{} · {} · {} · {}", video.duration, video.size, video.page, video.uploaded)}</span>
                </button>
            }
        })
        .collect_view();

    let summary_text = Signal::derive(move || panel.result.get().map(|r| r.summary).unwrap_or_default());

    view! {
        <section class="feature-panel feature-panel--video">
            <div class="feature-panel__form">
                <div class="attachments">{attachments}</div>
                <input
                    class="input"
                    type="url"
                    placeholder="Or paste a video URL..."
                    prop:value=move || panel.input.with(|i| i.video_url.clone())
                    on:input=move |ev| panel.edit(|i| i.video_url = event_target_value(&ev))
                />
                <button class="btn btn--primary" disabled=move || !panel.can_trigger() on:click=move |_| panel.trigger()>
                    {move || if panel.is_busy() { "Processing..." } else { "Summarize video" }}
                </button>
            </div>

            <Show when=move || panel.is_busy()>
                <BusyIndicator progress=Signal::derive(move || panel.progress()) label="Processing video"/>
            </Show>

            {move || match panel.result.get() {
                None => view! { <EmptyState feature=FeatureId::Video/> }.into_any(),
                Some(summary) => view! {
                    <VideoSummaryView summary/>
                    <VoiceQuestion/>
                    <ExportBar export=panel.exporter() copy_text=summary_text/>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn VideoSummaryView(summary: VideoSummary) -> impl IntoView {
    view! {
        <div class="result">
            <div class="result__title-row">
                <h3 class="result__title">{summary.title}</h3>
                <span class="badge badge--outline">{summary.duration}</span>
            </div>
            <p class="result__body">{summary.summary}</p>
            <h4 class="result__heading">"Key points"</h4>
            <ul class="result__list">
                {summary.key_points.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
            </ul>
            <h4 class="result__heading">"Speakers"</h4>
            <div class="chips">
                {summary.speakers.into_iter().map(|s| view! { <span class="chip">{s}</span> }).collect_view()}
            </div>
            <h4 class="result__heading">"Action items"</h4>
            <ul class="result__list result__list--checks">
                {summary.action_items.into_iter().map(|a| view! { <li>{a}</li> }).collect_view()}
            </ul>
            <h4 class="result__heading">"Transcript"</h4>
            <p class="result__transcript">{summary.transcript}</p>
        </div>
    }
}

/// Follow-up question box. The mic button pretends to listen for a few
/// seconds, then fills in a canned question. Pressing it again stops early.
#[component]
fn VoiceQuestion() -> impl IntoView {
    let question = RwSignal::new(String::new());
    let listening = RwSignal::new(false);
    let task = StoredValue::new(None::<PendingTask>);

    on_cleanup(move || {
        let _ = task.try_update_value(Option::take);
    });

    let toggle = move |_| {
        if listening.get_untracked() {
            task.set_value(None);
            listening.set(false);
            log::debug!("voice question stopped");
            return;
        }
        listening.set(true);
        #[cfg(feature = "hydrate")]
        {
            use features::mock::{VOICE_LISTEN, VOICE_QUESTION};

            let (run, handle) = crate::util::mock_task::abortable(FeatureId::Video, async move {
                gloo_timers::future::sleep(VOICE_LISTEN).await;
                question.set(VOICE_QUESTION.to_owned());
                listening.set(false);
            });
            task.set_value(Some(handle));
            leptos::task::spawn_local(async move {
                let _ = run.await;
            });
        }
    };

    view! {
        <div class="voice">
            <input
                class="input"
                placeholder="Ask a follow-up question about this video..."
                prop:value=move || question.get()
                on:input=move |ev| question.set(event_target_value(&ev))
            />
            <button
                class="btn btn--icon"
                class:btn--listening=move || listening.get()
                title=move || if listening.get() { "Stop listening" } else { "Ask by voice" }
                on:click=toggle
            >
                "🎤"
            </button>
            <Show when=move || listening.get()>
                <span class="voice__hint">"Listening..."</span>
            </Show>
        </div>
    }
}

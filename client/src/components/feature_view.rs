//! Maps a feature id to its panel component.

use features::FeatureId;
use leptos::prelude::*;

use crate::components::code_panel::CodePanel;
use crate::components::impact_panel::ImpactPanel;
use crate::components::search_panel::SearchPanel;
use crate::components::test_panel::TestPanel;
use crate::components::video_panel::VideoPanel;

/// Mount a fresh panel for `feature`. Remounting discards the previous
/// panel's form, result, and pending run.
#[component]
pub fn FeatureView(feature: FeatureId) -> impl IntoView {
    match feature {
        FeatureId::Search => view! { <SearchPanel/> }.into_any(),
        FeatureId::Video => view! { <VideoPanel/> }.into_any(),
        FeatureId::Code => view! { <CodePanel/> }.into_any(),
        FeatureId::Impact => view! { <ImpactPanel/> }.into_any(),
        FeatureId::Testing => view! { <TestPanel/> }.into_any(),
    }
}

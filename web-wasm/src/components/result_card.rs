//! 判定結果カードコンポーネント

use leptos::prelude::*;
use pse_triage_common::Evaluation;

#[component]
pub fn ResultCard(evaluation: Memo<Evaluation>) -> impl IntoView {
    view! {
        <div class=move || {
            evaluation.with(|e| format!("result-card glass-panel {}", e.outcome.style))
        }>
            <span id="resultBadge" class="badge">
                {move || evaluation.with(|e| e.outcome.badge.clone())}
            </span>
            <h2 id="resultTitle">
                {move || evaluation.with(|e| e.outcome.title.clone())}
            </h2>
            <p id="resultSummary">
                {move || evaluation.with(|e| e.summary_text().to_string())}
            </p>
            <div id="resultTags" class="tags">
                {move || {
                    evaluation.with(|e| {
                        e.tags
                            .iter()
                            .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}

//! 事件資訊パネルコンポーネント

use leptos::prelude::*;
use pse_triage_common::Metadata;
use crate::components::progress_bar::ProgressBar;

const FIELD_LABELS: [(&str, &str, &str); 4] = [
    ("eventName", "事件名稱", "例：泵浦軸封洩漏"),
    ("eventLocation", "發生地點", "例：第二反應區"),
    ("eventTime", "發生時間", "例：2026-10-18 14:30"),
    ("reporter", "通報人", "姓名"),
];

#[component]
pub fn MetadataPanel(
    metadata: ReadSignal<Metadata>,
    set_metadata: WriteSignal<Metadata>,
    progress: Memo<u8>,
) -> impl IntoView {
    let inputs = FIELD_LABELS
        .into_iter()
        .map(|(field, label, placeholder)| {
            view! {
                <div class="form-group">
                    <label for=field>{label}</label>
                    <input
                        type="text"
                        id=field
                        placeholder=placeholder
                        prop:value=move || {
                            metadata.with(|m| m.get(field).unwrap_or_default().to_string())
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_metadata.update(|m| {
                                m.set(field, value);
                            });
                        }
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="metadata-panel glass-panel">
            <h3>"事件資訊"</h3>
            <div class="settings-grid">{inputs}</div>
            <ProgressBar progress=progress />
        </section>
    }
}

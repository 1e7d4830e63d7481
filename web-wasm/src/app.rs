//! メインアプリケーションコンポーネント
//!
//! データの流れは一方向:
//! 入力シグナル（InputSet / Metadata）→ 判定（Memo）→ 表示コンポーネント

use leptos::prelude::*;
use gloo::timers::callback::Timeout;
use crate::clipboard::{self, CopyMethod};
use crate::components::{
    action_buttons::ActionButtons,
    header::Header,
    metadata_panel::MetadataPanel,
    result_card::ResultCard,
    triage_form::TriageForm,
};
use pse_triage_common::{
    compose_for, completion_percent, InputSet, Metadata, RuleTable, COPY_ACK_MS,
    COPY_FAILED_MESSAGE, DEFAULT_TABLE,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let initial = RuleTable::builtin(DEFAULT_TABLE).unwrap_or_else(RuleTable::threshold);
    let (table, set_table) = signal(initial);
    let (inputs, set_inputs) = signal(InputSet::new());
    let (metadata, set_metadata) = signal(Metadata::default());
    let (copied, set_copied) = signal(false);

    // 入力が変わるたびに丸ごと再計算
    let evaluation = Memo::new(move |_| table.with(|t| inputs.with(|i| t.evaluate(i))));
    let progress = Memo::new(move |_| metadata.with(completion_percent));

    // リセットハンドラ
    let on_reset = move |_| {
        set_inputs.set(InputSet::new());
        set_metadata.set(Metadata::default());
    };

    // テーブル切替ハンドラ
    let on_switch_table = move |name: String| {
        if let Some(next) = RuleTable::builtin(&name) {
            gloo::console::log!(format!("rule table: {}", next.name));
            set_table.set(next);
            set_inputs.set(InputSet::new());
            set_metadata.set(Metadata::default());
        }
    };

    // 複製ハンドラ
    let on_copy = move |_| {
        let (text, allow_fallback) = table.with(|t| {
            let text = evaluation.with(|e| metadata.with(|m| compose_for(t, e, m)));
            (text, t.clipboard_fallback)
        });
        wasm_bindgen_futures::spawn_local(async move {
            match clipboard::copy_text(text, allow_fallback).await {
                Ok(method) => {
                    if method == CopyMethod::Selection {
                        gloo::console::log!("copied with selection fallback");
                    }
                    set_copied.set(true);
                    Timeout::new(COPY_ACK_MS, move || set_copied.set(false)).forget();
                }
                Err(e) => {
                    gloo::console::error!(format!("clipboard write failed: {}", e));
                    clipboard::alert(COPY_FAILED_MESSAGE);
                }
            }
        });
    };

    view! {
        <div class="container">
            <Header table=table on_switch_table=on_switch_table />

            <div class="layout">
                <div class="form-column">
                    <Show when=move || table.with(|t| t.tracks_metadata)>
                        <MetadataPanel
                            metadata=metadata
                            set_metadata=set_metadata
                            progress=progress
                        />
                    </Show>

                    <TriageForm
                        table=table
                        inputs=inputs
                        set_inputs=set_inputs
                        evaluation=evaluation
                    />
                </div>

                <div class="result-column">
                    <ResultCard evaluation=evaluation />

                    <ActionButtons
                        copied=copied
                        on_copy=on_copy
                        on_reset=on_reset
                    />
                </div>
            </div>
        </div>
    }
}

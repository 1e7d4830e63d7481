//! 複製・リセットボタンコンポーネント

use leptos::prelude::*;
use pse_triage_common::COPY_ACK_LABEL;

#[component]
pub fn ActionButtons<FC, FR>(
    copied: ReadSignal<bool>,
    on_copy: FC,
    on_reset: FR,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
{
    view! {
        <div class="action-buttons">
            <button
                id="copyResult"
                class="btn btn-primary"
                on:click={
                    let on_copy = on_copy.clone();
                    move |_| on_copy(())
                }
            >
                {move || if copied.get() { COPY_ACK_LABEL } else { "📋 複製結果" }}
            </button>

            <button
                id="resetForm"
                class="btn btn-secondary"
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                "↺ 重新填寫"
            </button>
        </div>
    }
}

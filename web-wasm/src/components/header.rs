//! ヘッダーコンポーネント

use leptos::prelude::*;
use pse_triage_common::{RuleTable, BUILTIN_TABLES};

#[component]
pub fn Header<FS>(
    table: ReadSignal<RuleTable>,
    on_switch_table: FS,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone,
{
    let options = BUILTIN_TABLES
        .iter()
        .filter_map(|name| RuleTable::builtin(name))
        .map(|t| {
            let name = t.name.clone();
            let selected = {
                let name = name.clone();
                move || table.with(|current| current.name == name)
            };
            view! { <option value=name.clone() prop:selected=selected>{t.title.clone()}</option> }
        })
        .collect_view();

    view! {
        <header class="header glass-panel">
            <div>
                <h1>"🧯 製程安全事件分級判定"</h1>
                <p class="text-muted">
                    {move || table.with(|t| t.description.clone())}
                </p>
            </div>
            <label class="table-switch">
                "判定表 "
                <select on:change={
                    let on_switch_table = on_switch_table.clone();
                    move |ev| on_switch_table(event_target_value(&ev))
                }>
                    {options}
                </select>
            </label>
        </header>
    }
}

//! 判定フォームコンポーネント
//!
//! ラジオグループはテーブルのフィールド定義から生成する。

use leptos::prelude::*;
use pse_triage_common::{Evaluation, FieldSpec, InputSet, RuleTable, Section};

#[component]
pub fn TriageForm(
    table: ReadSignal<RuleTable>,
    inputs: ReadSignal<InputSet>,
    set_inputs: WriteSignal<InputSet>,
    evaluation: Memo<Evaluation>,
) -> impl IntoView {
    let fields_in = move |section: Section| {
        table.with(|t| {
            t.fields
                .iter()
                .filter(|f| f.section == section)
                .map(|f| (t.name.clone(), f.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <form id="triageForm" class="triage-form" on:submit=|ev| ev.prevent_default()>
            <fieldset class="glass-panel">
                <legend>"1. 適用性判斷"</legend>
                <For
                    each=move || fields_in(Section::Applicability)
                    key=|(table_name, field)| format!("{}/{}", table_name, field.name)
                    children=move |(_, field)| view! {
                        <FieldGroup field=field inputs=inputs set_inputs=set_inputs />
                    }
                />
            </fieldset>

            // 非製程の間は後果セクションを無効表示
            <fieldset
                id="consequenceSection"
                class="glass-panel"
                class:disabled=move || evaluation.with(|e| e.non_process)
            >
                <legend>"2. 後果評估"</legend>
                <For
                    each=move || fields_in(Section::Consequence)
                    key=|(table_name, field)| format!("{}/{}", table_name, field.name)
                    children=move |(_, field)| view! {
                        <FieldGroup field=field inputs=inputs set_inputs=set_inputs />
                    }
                />
            </fieldset>
        </form>
    }
}

/// ラジオグループ1つ分
#[component]
fn FieldGroup(
    field: FieldSpec,
    inputs: ReadSignal<InputSet>,
    set_inputs: WriteSignal<InputSet>,
) -> impl IntoView {
    let name = field.name.clone();
    let options = field
        .options
        .into_iter()
        .map(|option| {
            let checked = {
                let name = name.clone();
                let value = option.value.clone();
                move || inputs.with(|i| i.get(&name) == Some(value.as_str()))
            };
            let on_change = {
                let name = name.clone();
                let value = option.value.clone();
                move |_: leptos::ev::Event| set_inputs.update(|i| i.select(name.clone(), value.clone()))
            };
            view! {
                <label class="radio-option">
                    <input
                        type="radio"
                        name=name.clone()
                        value=option.value
                        prop:checked=checked
                        on:change=on_change
                    />
                    <span>{option.label}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="form-group">
            <p class="field-label">{field.label}</p>
            <div class="radio-group">{options}</div>
        </div>
    }
}

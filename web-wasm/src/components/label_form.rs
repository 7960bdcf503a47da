//! ラベル入力フォームコンポーネント

use leptos::prelude::*;
use tyre_labeler_common::{Condition, LabelField, LabelRecord};

const TEXT_FIELDS: [LabelField; 3] = [LabelField::Size, LabelField::TreadDepth, LabelField::Brand];

#[component]
pub fn LabelForm<F>(
    #[prop(into)] label: Signal<LabelRecord>,
    on_edit: F,
) -> impl IntoView
where
    F: Fn(LabelField, String) + 'static + Clone + Send,
{
    let text_inputs = TEXT_FIELDS
        .into_iter()
        .map(|field| {
            let on_edit = on_edit.clone();
            let id = format!("field-{}", field.key());
            view! {
                <div class="form-group">
                    <label for=id.clone()>{field.prompt()}</label>
                    <input
                        type="text"
                        id=id
                        placeholder=field.placeholder()
                        prop:value=move || label.with(|l| l.field(field).to_string())
                        on:input=move |ev| on_edit(field, event_target_value(&ev))
                    />
                </div>
            }
        })
        .collect_view();

    let condition_options = Condition::ALL
        .into_iter()
        .map(|condition| {
            view! {
                <option value=condition.as_str()>{condition.label()}</option>
            }
        })
        .collect_view();

    view! {
        <div class="label-form">
            {text_inputs}
            <div class="form-group">
                <label for="field-condition">{LabelField::Condition.prompt()}</label>
                <select
                    id="field-condition"
                    prop:value=move || label.with(|l| l.condition.as_str())
                    on:change=move |ev| on_edit(LabelField::Condition, event_target_value(&ev))
                >
                    {condition_options}
                </select>
            </div>
        </div>
    }
}

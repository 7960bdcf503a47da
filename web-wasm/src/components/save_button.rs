//! 保存ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn SaveButton<F>(
    #[prop(into)] can_save: Signal<bool>,
    #[prop(into)] saved_count: Signal<usize>,
    on_save: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    view! {
        <button
            class="btn-save"
            disabled=move || !can_save.get()
            on:click=move |_| on_save(())
        >
            "Save Labels"
        </button>
        <p class="text-muted">
            {move || format!("このセッションで保存済み: {}件", saved_count.get())}
        </p>
    }
}

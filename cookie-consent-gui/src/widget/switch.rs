use leptos::*;

/// Controlled on/off switch. `on_change` receives the value the user just
/// selected; the rendered state only follows `checked`.
#[component]
pub fn switch(
    #[prop(into)] id: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="switch" for=id.clone()>
            <input
                type="checkbox"
                class="switch-input"
                id=id
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.call(event_target_checked(&ev))
            />
            <span class="switch-slider"></span>
        </label>
    }
}

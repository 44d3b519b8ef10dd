use crate::{state::RowEvent, widget::Switch};
use cookie_consent_data::CookieCategory;
use leptos::*;

/// One category row. Holds no state of its own: expansion and the switch
/// value come from the parent and every interaction is reported back.
#[component]
pub fn cookie_preference(
    category: CookieCategory,
    #[prop(into)] expanded: Signal<bool>,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_check_change: Callback<bool>,
) -> impl IntoView {
    let CookieCategory {
        id,
        title,
        description,
    } = category;
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if let Some(RowEvent::Toggle) = RowEvent::from_key(&ev.key()) {
            ev.prevent_default();
            on_toggle.call(());
        }
    };
    let icon = move || match expanded.get() {
        true => "/chevron-down.svg",
        false => "/chevron-up.svg",
    };
    let icon_label = move || match expanded.get() {
        true => "Collapse",
        false => "Expand",
    };
    view! {
        <div class="cookie-preference">
            <div class="cookie-preference-body">
                <div class="cookie-preference-header">
                    <p class="cookie-preference-title">{title}</p>
                    <div
                        class="cookie-preference-toggle"
                        role="button"
                        tabindex="0"
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| on_toggle.call(())
                        on:keydown=on_keydown
                    >
                        <img src=icon alt=icon_label/>
                    </div>
                </div>
                <p class="cookie-preference-description" class:hidden=move || !expanded.get()>
                    {description}
                </p>
                <hr/>
            </div>
            <Switch id checked on_change=on_check_change/>
        </div>
    }
}

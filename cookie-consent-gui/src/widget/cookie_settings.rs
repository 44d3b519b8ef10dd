use crate::state::{Consent, PresentationMode, RowEvent, SettingsState};
use crate::widget::*;
use cookie_consent_data::CookieCategories;
use leptos::*;

/// Cookie preference panel, either inline or behind a modal dialog.
///
/// `on_save` is only reachable in [`PresentationMode::Dialog`]; it receives
/// the switch values at the moment the user saves.
#[component]
pub fn cookie_settings(
    categories: CookieCategories,
    #[prop(optional)] mode: PresentationMode,
    #[prop(optional, into)] on_save: Option<Callback<Consent>>,
) -> impl IntoView {
    let state = create_rw_signal(SettingsState::new(categories));

    let rows = move || {
        state
            .with_untracked(|state| state.consent.categories().clone())
            .iter()
            .cloned()
            .map(|category| {
                let expanded = {
                    let id = category.id.clone();
                    Signal::derive(move || state.with(|state| state.consent.is_expanded(&id)))
                };
                let checked = {
                    let id = category.id.clone();
                    Signal::derive(move || state.with(|state| state.consent.is_checked(&id)))
                };
                let on_toggle = {
                    let id = category.id.clone();
                    Callback::new(move |_: ()| {
                        state.update(|state| state.consent.apply(&id, RowEvent::Toggle))
                    })
                };
                let on_check_change = {
                    let id = category.id.clone();
                    Callback::new(move |value: bool| {
                        state.update(|state| state.consent.apply(&id, RowEvent::Check(value)))
                    })
                };
                view! {
                    <CookiePreference category expanded checked on_toggle on_check_change/>
                }
            })
            .collect_view()
    };

    let save = Callback::new(move |_: ()| {
        if let Some(consent) = state.try_update(SettingsState::save) {
            if let Some(on_save) = on_save {
                on_save.call(consent);
            }
        }
    });

    match mode {
        PresentationMode::Inline => view! {
            <div class="cookie-settings">{rows}</div>
        }
        .into_view(),
        PresentationMode::Dialog => {
            let open = Signal::derive(move || state.with(|state| state.dialog.is_open()));
            let close = Callback::new(move |_: ()| state.update(|state| state.dialog.close()));
            view! {
                <Button on_click=move |_: ()| state.update(|state| state.dialog.open())>
                    "Cookie settings"
                </Button>
                <Dialog title="Cookie settings" open on_close=close>
                    <div class="cookie-settings">{rows()}</div>
                    <DialogActions>
                        <Button button_type=ButtonType::Secondary on_click=close>
                            "Cancel"
                        </Button>
                        <Button on_click=save>"Save preferences"</Button>
                    </DialogActions>
                </Dialog>
            }
            .into_view()
        }
    }
}

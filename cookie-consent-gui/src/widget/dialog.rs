use crate::state::is_dismiss_key;
use leptos::*;

#[component]
pub fn dialog(
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    // Escape closes the dialog wherever focus is.
    let escape = window_event_listener(ev::keydown, move |ev| {
        if open.get_untracked() && is_dismiss_key(&ev.key()) {
            on_close.call(());
        }
    });
    on_cleanup(move || escape.remove());
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.call(())>
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:click=|ev| ev.stop_propagation()
                >
                    <header class="dialog-header">
                        <h2>{title.clone()}</h2>
                        <button
                            type="button"
                            class="dialog-close"
                            aria-label="Close"
                            on:click=move |_| on_close.call(())
                        >
                            "×"
                        </button>
                    </header>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn dialog_actions(children: Children) -> impl IntoView {
    view! { <footer class="dialog-actions">{children()}</footer> }
}

use crate::state::Readiness;
use leptos::*;

/// Renders its children only once mounted in the browser. Effects never run
/// during server rendering, so the server and the hydrating client both
/// produce an empty node first.
#[component]
pub fn client_only(children: ChildrenFn) -> impl IntoView {
    let (readiness, set_readiness) = create_signal(Readiness::NotReady);
    create_effect(move |_| {
        log::debug!("Client mounted");
        set_readiness.update(Readiness::mounted);
    });
    view! {
        <Show when=move || readiness.get().is_ready()>
            {children()}
        </Show>
    }
}

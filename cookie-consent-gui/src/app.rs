use crate::state::{Consent, PresentationMode};
use crate::widget::{ClientOnly, CookieSettings};
use cookie_consent_data::CookieCategories;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/cookie-consent.css"/>
        <Title text="Cookie settings"/>

        <Router>
            <main>
                <Routes>
                    <Route path="" view=DialogPage/>
                    <Route path="/preferences" view=InlinePage/>
                </Routes>
            </main>
        </Router>
    }
}

fn log_consent(consent: Consent) {
    log::info!("Cookie preferences saved: {}", consent);
}

#[component]
fn dialog_page() -> impl IntoView {
    view! {
        <ClientOnly>
            <CookieSettings
                categories=CookieCategories::default()
                mode=PresentationMode::Dialog
                on_save=log_consent
            />
        </ClientOnly>
    }
}

#[component]
fn inline_page() -> impl IntoView {
    view! {
        <h1>"Cookie preferences"</h1>
        <ClientOnly>
            <CookieSettings categories=CookieCategories::default() mode=PresentationMode::Inline/>
        </ClientOnly>
    }
}

pub mod app;
pub mod fileserv;
pub mod state;
pub mod widget;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen]
        pub fn hydrate() {
            use app::App;

            console_error_panic_hook::set_once();
            if let Err(err) = console_log::init_with_level(log::Level::Debug) {
                leptos::logging::error!("could not initialize logging: {}", err);
            }
            leptos::mount_to_body(App);
        }
    }
}

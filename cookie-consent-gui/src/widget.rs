mod button;
mod client_only;
mod cookie_preference;
mod cookie_settings;
mod dialog;
mod switch;

pub use button::*;
pub use client_only::*;
pub use cookie_preference::*;
pub use cookie_settings::*;
pub use dialog::*;
pub use switch::*;

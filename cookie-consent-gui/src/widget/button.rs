use leptos::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn class(self) -> &'static str {
        match self {
            ButtonType::Primary => "button primary",
            ButtonType::Secondary => "button secondary",
        }
    }
}

#[component]
pub fn button(
    #[prop(optional)] button_type: ButtonType,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=button_type.class() on:click=move |_| on_click.call(())>
            {children()}
        </button>
    }
}

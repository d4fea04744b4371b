use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Danger,
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 px-6 py-3 font-semibold rounded-lg transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-950";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-orange-500 to-amber-500 text-white hover:from-orange-600 hover:to-amber-600 hover:shadow-lg hover:shadow-orange-500/25 focus:ring-orange-500",
        ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500",
    };

    let classes = format!(
        "{} {} disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, variant_classes
    );

    let loading_text_display = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type_val = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    view! {
        <button type=button_type_val class=classes disabled=move || loading.get()>
            <Show when=move || loading.get()>
                <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                <span>{loading_text_display.clone()}</span>
            </Show>
            <span class:hidden=move || loading.get()>{children()}</span>
        </button>
    }
}

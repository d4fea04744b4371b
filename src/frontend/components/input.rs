use leptos::prelude::*;

const ERROR_CLASSES: &str = "mt-1 text-sm text-red-400";

const FIELD_CLASSES: &str = "w-full px-4 py-3 rounded-lg bg-slate-800 border border-slate-700
                       text-white placeholder-slate-500
                       focus:outline-none focus:ring-2 focus:ring-orange-500 focus:border-transparent
                       transition-all";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] input_type: String,
    #[prop(optional)] required: bool,
    value: RwSignal<String>,
    /// Validation message shown under the field.
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            />
            {move || error.get().map(|message| view! { <p class=ERROR_CLASSES>{message}</p> })}
        </div>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(optional)] rows: Option<u8>,
    #[prop(optional)] required: bool,
    value: RwSignal<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <textarea
                id=name.clone()
                name=name
                placeholder=placeholder
                rows=rows.unwrap_or(5)
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            ></textarea>
            {move || error.get().map(|message| view! { <p class=ERROR_CLASSES>{message}</p> })}
        </div>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="you@example.com"
            input_type="email"
            required=true
            value=value
            error=error
        />
    }
}

#[component]
pub fn PasswordInput(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="password"
            placeholder="••••••••"
            input_type="password"
            required=true
            value=value
        />
    }
}

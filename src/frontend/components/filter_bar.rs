use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub count: Option<usize>,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

const ACTIVE: &str = "px-4 py-2 rounded-full text-sm transition-colors border bg-orange-500 border-orange-500 text-white";
const IDLE: &str = "px-4 py-2 rounded-full text-sm transition-colors border border-slate-700 text-slate-400 hover:text-white";

/// Row of chips; the active one follows `selected`.
#[component]
pub fn FilterBar(options: Vec<FilterOption>, selected: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-2 mb-8">
            {options
                .into_iter()
                .map(|option| {
                    let value = option.value.clone();
                    let active = Memo::new({
                        let value = value.clone();
                        move |_| selected.with(|s| *s == value)
                    });
                    let text = match option.count {
                        Some(count) => format!("{} ({count})", option.label),
                        None => option.label,
                    };
                    view! {
                        <button
                            type="button"
                            class=move || if active.get() { ACTIVE } else { IDLE }
                            on:click=move |_| selected.set(value.clone())
                        >
                            {text}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

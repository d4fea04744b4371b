//! Generic list + form panel, instantiated once per content kind

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::common::FormFeedback;
use crate::fetch::filter::{self, ALL};
use crate::frontend::Backend;
use crate::frontend::browser::confirm;
use crate::frontend::components::{Button, EmptyState, ErrorAlert, FilterBar, FilterOption};
use crate::frontend::hooks::{Fetch, fetch_view, use_fetch};
use crate::manager::form::{FieldKind, FieldSpec, FormValues};
use crate::manager::{ContentManager, Entity, ManagerView, Publishable};
use crate::store::RestStore;

/// Extra per-row control, such as the publish toggle on blog posts.
pub type RowAction<E> = fn(&E, &Backend, Fetch<Vec<E>>, RwSignal<Option<String>>) -> AnyView;

const INPUT_CLASSES: &str = "w-full px-4 py-2 rounded-lg bg-slate-800 border border-slate-700 text-white \
                             focus:outline-none focus:ring-2 focus:ring-orange-500";

fn manager<E: Entity>(backend: &Backend) -> ContentManager<E, RestStore> {
    ContentManager::new(backend.store())
}

pub fn manager_panel<E: Entity + Send + Sync>(
    row_action: Option<RowAction<E>>,
) -> impl IntoView {
    let backend = expect_context::<Backend>();
    let items = use_fetch(E::FAILURE_MESSAGE, {
        let backend = backend.clone();
        move || {
            let manager = manager::<E>(&backend);
            async move { manager.list().await }
        }
    });
    let view_state = RwSignal::new(ManagerView::<E>::List);
    let selected = RwSignal::new(ALL.to_string());
    let notice = RwSignal::new(None::<String>);

    move || match view_state.get() {
        ManagerView::List => {
            list_view(backend.clone(), items, view_state, selected, notice, row_action)
                .into_any()
        }
        form => form_view(form, backend.clone(), items, view_state).into_any(),
    }
}

fn list_view<E: Entity + Send + Sync>(
    backend: Backend,
    items: Fetch<Vec<E>>,
    view_state: RwSignal<ManagerView<E>>,
    selected: RwSignal<String>,
    notice: RwSignal<Option<String>>,
    row_action: Option<RowAction<E>>,
) -> impl IntoView {
    let rows = fetch_view(items.state, 3, E::EMPTY_MESSAGE, move |list: &Vec<E>| {
        let values: Vec<&str> = E::filters().iter().map(|(value, _)| *value).collect();
        let counts = filter::counts(list, &values, |item, f| item.matches_filter(f));
        let options = E::filters()
            .iter()
            .zip(counts)
            .map(|((value, label), (_, count))| {
                let option = FilterOption::new(*value, *label);
                if E::SHOW_FILTER_COUNTS { option.with_count(count) } else { option }
            })
            .collect::<Vec<_>>();

        let list = list.clone();
        let backend = backend.clone();
        let visible = move || {
            let current = selected.get();
            let matching = filter::apply(&list, &current, |item, f| item.matches_filter(f));
            if matching.is_empty() {
                return view! { <EmptyState message="Nothing matches this filter."/> }.into_any();
            }
            matching
                .into_iter()
                .map(|item| row(item, &backend, items, view_state, notice, row_action))
                .collect_view()
                .into_any()
        };

        view! {
            <FilterBar options=options selected=selected/>
            <div class="space-y-4">{visible}</div>
        }
    });

    view! {
        <div class="flex items-center justify-between mb-8">
            <h2 class="text-2xl font-bold">{E::TITLE}</h2>
            <button type="button" class="btn-primary" on:click=move |_| view_state.set(ManagerView::Create)>
                {format!("+ Add {}", E::NOUN)}
            </button>
        </div>
        {move || notice.get().map(|message| view! { <ErrorAlert message=message/> })}
        {rows}
    }
}

fn row<E: Entity + Send + Sync>(
    item: &E,
    backend: &Backend,
    items: Fetch<Vec<E>>,
    view_state: RwSignal<ManagerView<E>>,
    notice: RwSignal<Option<String>>,
    row_action: Option<RowAction<E>>,
) -> impl IntoView + use<E> {
    let summary = item.summary();
    let badges = summary
        .badges
        .into_iter()
        .map(|badge| {
            view! {
                <span class="px-2 py-1 text-xs rounded-full bg-orange-500/10 text-orange-300">
                    {badge}
                </span>
            }
        })
        .collect_view();
    let extra = row_action.map(|action| action(item, backend, items, notice));

    let on_edit = {
        let item = item.clone();
        move |_| view_state.set(ManagerView::Edit(item.clone()))
    };
    let on_delete = {
        let id = item.id();
        let backend = backend.clone();
        move |_| {
            let noun = E::NOUN.to_lowercase();
            if !confirm(&format!("Are you sure you want to delete this {noun}?")) {
                return;
            }
            let manager = manager::<E>(&backend);
            spawn_local(async move {
                match manager.remove(id).await {
                    Ok(()) => {
                        notice.try_set(None);
                        items.reload();
                    }
                    Err(e) => {
                        crate::log_err!("delete", e);
                        notice.try_set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 rounded-xl border border-slate-800 bg-slate-900/50 p-5">
            <div class="min-w-0">
                <div class="flex flex-wrap items-center gap-2 mb-1">
                    <h3 class="font-semibold truncate">{summary.title}</h3>
                    {badges}
                </div>
                <p class="text-sm text-orange-300">{summary.subtitle}</p>
                <p class="text-sm text-slate-400 line-clamp-2">{summary.detail}</p>
            </div>
            <div class="flex gap-2 shrink-0">
                {extra}
                <button type="button" class="px-3 py-2 rounded-lg bg-slate-800 hover:bg-slate-700 text-sm" on:click=on_edit>
                    "Edit"
                </button>
                <button type="button" class="px-3 py-2 rounded-lg bg-red-600/20 text-red-400 hover:bg-red-600/30 text-sm" on:click=on_delete>
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// Row action flipping the published flag in a single write.
pub fn publish_toggle<E: Publishable + Send + Sync>(
    item: &E,
    backend: &Backend,
    items: Fetch<Vec<E>>,
    notice: RwSignal<Option<String>>,
) -> AnyView {
    let label = if item.is_published() { "Unpublish" } else { "Publish" };
    let item = item.clone();
    let backend = backend.clone();
    let on_click = move |_| {
        let manager = manager::<E>(&backend);
        let item = item.clone();
        spawn_local(async move {
            match manager.toggle_publish(&item).await {
                Ok(()) => items.reload(),
                Err(e) => {
                    crate::log_err!("publish toggle", e);
                    notice.try_set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <button type="button" class="px-3 py-2 rounded-lg bg-emerald-600/20 text-emerald-400 hover:bg-emerald-600/30 text-sm" on:click=on_click>
            {label}
        </button>
    }
    .into_any()
}

fn form_view<E: Entity + Send + Sync>(
    view: ManagerView<E>,
    backend: Backend,
    items: Fetch<Vec<E>>,
    view_state: RwSignal<ManagerView<E>>,
) -> impl IntoView {
    let creating = !matches!(view, ManagerView::Edit(_));
    let editing = view.editing_id();
    let heading = view.heading();
    let values = RwSignal::new(view.initial_values());
    let feedback = RwSignal::new(FormFeedback::default());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        feedback.set(FormFeedback::default());
        let manager = manager::<E>(&backend);
        let snapshot = values.get_untracked();
        spawn_local(async move {
            match manager.save(editing, &snapshot).await {
                Ok(()) => {
                    items.reload();
                    view_state.try_set(ManagerView::List);
                }
                Err(e) => {
                    tracing::warn!(table = E::TABLE, error = %e, "save rejected");
                    feedback.try_set(FormFeedback::from_error(&e));
                }
            }
            saving.try_set(false);
        });
    };

    let submit_label = if creating {
        format!("Create {}", E::NOUN)
    } else {
        format!("Update {}", E::NOUN)
    };

    view! {
        <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-8">
            <h2 class="text-2xl font-bold mb-6">{heading}</h2>
            {move || {
                feedback
                    .with(|f| f.panel().map(str::to_string))
                    .map(|message| view! { <ErrorAlert message=message/> })
            }}
            <form class="grid md:grid-cols-2 gap-6" on:submit=on_submit>
                {E::fields()
                    .iter()
                    .map(|field| field_control::<E>(field, values, feedback, creating))
                    .collect_view()}
                <div class="md:col-span-2 flex justify-end gap-3">
                    <button type="button" class="btn-ghost" on:click=move |_| view_state.set(ManagerView::List)>
                        "Cancel"
                    </button>
                    <Button loading=saving loading_text="Saving...">
                        {submit_label}
                    </Button>
                </div>
            </form>
        </div>
    }
}

fn field_control<E: Entity>(
    field: &'static FieldSpec,
    values: RwSignal<FormValues>,
    feedback: RwSignal<FormFeedback>,
    creating: bool,
) -> AnyView {
    let name = field.name;
    let required = field.required;
    let current = move || values.with(|v| v.get(name).to_string());
    let edit = move |text: String| {
        values.update(|v| {
            v.set(name, text);
            E::on_field_change(v, name, creating);
        });
        feedback.update(|f| f.clear_field(name));
    };
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };
    let wide = matches!(field.kind, FieldKind::LongText { .. } | FieldKind::List);

    let control = match field.kind {
        FieldKind::LongText { rows } => view! {
            <textarea
                id=name
                rows=rows.to_string()
                placeholder=field.placeholder
                required=required
                prop:value=current
                on:input=move |ev| edit(event_target_value(&ev))
                class=INPUT_CLASSES
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                id=name
                required=required
                on:change=move |ev| edit(event_target_value(&ev))
                class=INPUT_CLASSES
            >
                {options
                    .iter()
                    .map(|(value, text)| {
                        let value = *value;
                        view! {
                            <option value=value selected=move || values.with(|v| v.get(name) == value)>
                                {*text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                id=name
                type="checkbox"
                prop:checked=move || values.with(|v| v.flag(name))
                on:change=move |ev| values.update(|v| v.set_flag(name, event_target_checked(&ev)))
                class="w-5 h-5 rounded accent-orange-500"
            />
        }
        .into_any(),
        FieldKind::Number { min, max } => view! {
            <input
                id=name
                type="number"
                min=min.to_string()
                max=max.to_string()
                placeholder=field.placeholder
                required=required
                prop:value=current
                on:input=move |ev| edit(event_target_value(&ev))
                class=INPUT_CLASSES
            />
        }
        .into_any(),
        kind => {
            let input_type = match kind {
                FieldKind::Url => "url",
                FieldKind::Date => "date",
                _ => "text",
            };
            view! {
                <input
                    id=name
                    type=input_type
                    placeholder=field.placeholder
                    required=required
                    prop:value=current
                    on:input=move |ev| edit(event_target_value(&ev))
                    class=INPUT_CLASSES
                />
            }
            .into_any()
        }
    };

    let hint = (field.kind == FieldKind::List).then(|| {
        view! { <p class="mt-1 text-xs text-slate-500">"Separate items with commas"</p> }
    });
    let error = move || {
        feedback
            .with(|f| f.for_field(name).map(str::to_string))
            .map(|message| view! { <p class="mt-1 text-sm text-red-400">{message}</p> })
    };

    let wrapper = if wide { "md:col-span-2" } else { "" };

    view! {
        <div class=wrapper>
            <label for=name class="block text-sm font-medium text-slate-300 mb-2">{label}</label>
            {control}
            {hint}
            {error}
        </div>
    }
    .into_any()
}

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-gray-800 rounded-lg focus:ring-2 focus:ring-indigo-500 outline-none text-white transition-colors";

fn input_class(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{} ring-2 ring-red-500", base)
    } else {
        base.to_string()
    }
}

/// Inline validation message under a field
#[component]
fn InlineError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
                <p class="mt-1 flex items-center gap-1 text-sm text-red-400" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="text-xs"/>
                    <span>{err}</span>
                </p>
            }
        })
    }
}

/// Labelled single-line input with blur validation and an inline error
#[component]
pub fn InputField(
    /// Element id and form field name
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (appends an asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Focus lost callback
    on_blur: Callback<()>,
    #[prop(optional)]
    on_focus: Option<Callback<()>>,
    #[prop(into)]
    disabled: Signal<bool>,
    /// Error message to display
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium mb-2">
                {label}
                {required.then_some(" *")}
            </label>
            <input
                type=input_type
                id=name
                name=name
                class=move || input_class(INPUT_CLASS, error.with(Option::is_some))
                placeholder=placeholder
                aria-invalid=move || error.with(Option::is_some).to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
                on:focus=move |_| {
                    if let Some(cb) = on_focus {
                        cb.run(());
                    }
                }
                disabled=move || disabled.get()
            />
            <InlineError error=error/>
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    name: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
    #[prop(optional)]
    on_focus: Option<Callback<()>>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Soft character counter shown under the box, e.g. `"42/500"`
    #[prop(optional, into)]
    counter: Option<Signal<String>>,
    /// Highlights the counter once the soft limit is passed
    #[prop(optional, into)]
    over_limit: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium mb-2">
                {label}
                {required.then_some(" *")}
            </label>
            <textarea
                id=name
                name=name
                class=move || {
                    input_class(&format!("{} resize-vertical", INPUT_CLASS), error.with(Option::is_some))
                }
                placeholder=placeholder
                rows=rows
                aria-invalid=move || error.with(Option::is_some).to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
                on:focus=move |_| {
                    if let Some(cb) = on_focus {
                        cb.run(());
                    }
                }
                disabled=move || disabled.get()
            />
            <div class="flex justify-between items-start">
                <InlineError error=error/>
                {counter.map(|counter| view! {
                    <span class=move || {
                        if over_limit.is_some_and(|o| o.get()) {
                            "mt-1 ml-auto text-xs text-yellow-400"
                        } else {
                            "mt-1 ml-auto text-xs text-gray-400"
                        }
                    }>
                        {move || counter.get()}
                    </span>
                })}
            </div>
        </div>
    }
}

use leptos::prelude::*;

/// Labelled text input bound to a signal
#[component]
pub fn FormField(
    /// Input id and name
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows asterisk and sets `required`)
    #[prop(into, default = Signal::stored(false))]
    required: Signal<bool>,
    /// Input type (text, email, tel, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id class="form-label">
                {label}
                <Show when=move || required.get()>
                    <span class="form-required">"*"</span>
                </Show>
            </label>
            <input
                type=input_type
                id=id
                name=id
                class="form-input"
                placeholder=placeholder
                autocomplete=autocomplete
                required=move || required.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Labelled text area bound to a signal
#[component]
pub fn TextAreaField(
    /// Text area id and name
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id class="form-label">{label}</label>
            <textarea
                id=id
                name=id
                class="form-input form-textarea"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Labelled `<select>` with a placeholder option
#[component]
pub fn SelectField(
    /// Select id and name
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Text of the empty first option
    placeholder: &'static str,
    /// Whether a choice is required
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id class="form-label">
                {label}
                {required.then(|| view! { <span class="form-required">"*"</span> })}
            </label>
            <select
                id=id
                name=id
                class="form-input form-select"
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="">{placeholder}</option>
                {options.into_iter().map(|(val, text)| {
                    view! { <option value=val>{text}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

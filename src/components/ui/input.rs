use leptos::html;
use leptos::prelude::*;

use super::class_names::{merge_classes, ClassFragment};

const INPUT_BASE: &str = "w-full px-3 py-2 rounded-md border border-input";
const INPUT_FOCUS: &str = "focus:border-primary focus:outline-none transition-colors";

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Password,
    Number,
    Search,
    Tel,
    Url,
}

pub fn input_class(class: &str) -> String {
    merge_classes(&[
        ClassFragment::Always(INPUT_BASE),
        ClassFragment::Always(INPUT_FOCUS),
        ClassFragment::extra(class),
    ])
}

/// Text input with the shared field styling.
///
/// Every attribute prop is forwarded to the `<input>` as given; absent ones
/// are not rendered at all. `bind_value` wires two-way binding through the
/// DOM `value` property, `on_input` receives the value on every keystroke.
#[component]
pub fn StyledInput(
    // Styling
    #[prop(into, optional)] class: String,

    // Common HTML attributes
    #[prop(optional)] input_type: Option<InputType>,
    #[prop(into, optional)] id: Option<String>,
    #[prop(into, optional)] name: Option<String>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into, optional)] value: Option<String>,
    #[prop(into, optional)] autocomplete: Option<String>,
    #[prop(into, optional)] aria_label: Option<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] readonly: bool,
    #[prop(optional)] required: bool,
    #[prop(optional)] autofocus: bool,

    // Events and binding
    #[prop(optional)] bind_value: Option<RwSignal<String>>,
    #[prop(into, optional)] on_input: Option<Callback<String>>,

    // Ref for direct DOM access
    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let merged_class = input_class(&class);
    let input_type = input_type.map(<&'static str>::from);

    // Without a bound signal the property only ever carries the initial value.
    let initial_value = value.clone();
    let current_value = move || match bind_value {
        Some(bound) => bound.get(),
        None => initial_value.clone().unwrap_or_default(),
    };

    let handle_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        if let Some(bound) = bind_value {
            bound.set(text.clone());
        }
        if let Some(on_input) = on_input {
            on_input.run(text);
        }
    };

    view! {
        <input
            data-name="StyledInput"
            type=input_type
            class=merged_class
            id=id
            name=name
            placeholder=placeholder
            value=value
            autocomplete=autocomplete
            aria-label=aria_label
            disabled=disabled
            readonly=readonly
            required=required
            autofocus=autofocus
            prop:value=current_value
            on:input=handle_input
            node_ref=node_ref
        />
    }
}

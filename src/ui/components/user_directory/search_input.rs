use dioxus::prelude::*;

/// Free-text name filter. Every keystroke is forwarded to `on_input`.
#[component]
pub fn DirectorySearchInput(value: String, disabled: bool, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            r#type: "text",
            class: "block w-full px-4 py-2 mb-4 border rounded disabled:bg-gray-100",
            placeholder: "Type a search term",
            value: "{value}",
            disabled,
            oninput: move |event: FormEvent| on_input.call(event.value()),
        }
    }
}

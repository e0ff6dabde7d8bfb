use dioxus::prelude::*;

/// Spinner shown while users are being fetched
#[component]
pub fn DirectoryLoading() -> Element {
    rsx! {
        div { class: "flex items-center justify-center space-x-2 mb-3",
            div { class: "w-5 h-5 border-2 border-blue-500 border-t-transparent rounded-full animate-spin" }
            span { "Loading..." }
        }
    }
}

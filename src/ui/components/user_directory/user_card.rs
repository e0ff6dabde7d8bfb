use crate::models::User;
use dioxus::prelude::*;

#[component]
pub fn UserCard(user: User) -> Element {
    rsx! {
        li { class: "p-4 border rounded bg-gray-50 shadow-sm",
            h2 { class: "font-semibold", "{user.name}" }
            if let Some(phrase) = user.catch_phrase() {
                p { class: "text-gray-600", "{phrase}" }
            }
        }
    }
}

use super::user_card::UserCard;
use crate::models::User;
use dioxus::prelude::*;

/// List of users that passed the name filter
#[component]
pub fn UserList(users: Vec<User>) -> Element {
    rsx! {
        ul { class: "space-y-4",
            for user in users {
                UserCard { key: "{user.id}", user: user.clone() }
            }
        }
    }
}

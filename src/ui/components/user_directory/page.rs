use crate::directory::{load_users, DirectoryState};
use crate::AppContext;
use dioxus::prelude::*;
use tracing::debug;

use super::loading::DirectoryLoading;
use super::search_input::DirectorySearchInput;
use super::user_list::UserList;

/// Users fetched once on mount, filtered by name prefix as the user types
#[component]
pub fn UserDirectory() -> Element {
    debug!("Component rendering");
    let app_context = use_context::<AppContext>();
    let mut directory = use_signal(DirectoryState::default);

    // Nothing is read here, so the effect only runs on mount
    use_effect(move || {
        debug!("Starting load_users effect");
        let config = app_context.config.clone();
        let user_source = app_context.user_source.clone();
        directory.write().begin_fetch();
        spawn(async move {
            let result = load_users(
                user_source.source(),
                config.fetch_delay,
                config.max_records,
            )
            .await;
            directory.write().finish_fetch(result);
        });
    });

    let (search_term, shows_spinner, search_disabled, shows_list, visible_users) = {
        let state = directory.read();
        (
            state.search_term().to_string(),
            state.shows_spinner(),
            state.search_disabled(),
            state.shows_list(),
            state.visible_users(),
        )
    };

    rsx! {
        div { class: "flex items-center justify-center min-h-screen bg-gray-100",
            div { class: "bg-white p-8 rounded shadow w-full max-w-lg",
                h1 { class: "text-2xl font-bold mb-6", "API Data Fetching" }

                if shows_spinner {
                    DirectoryLoading {}
                }

                DirectorySearchInput {
                    value: search_term,
                    disabled: search_disabled,
                    on_input: move |term: String| directory.write().set_search_term(term),
                }

                if shows_list {
                    UserList { users: visible_users }
                }
            }
        }
    }
}

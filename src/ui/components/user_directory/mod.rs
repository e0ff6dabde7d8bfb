mod loading;
mod page;
mod search_input;
mod user_card;
mod user_list;

pub use page::UserDirectory;

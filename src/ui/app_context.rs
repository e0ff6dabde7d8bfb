use crate::config;
use crate::user_source::SharedUserSource;

/// Services handed to the UI at launch
#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub user_source: SharedUserSource,
}

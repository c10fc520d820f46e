#[allow(clippy::module_inception)]
mod app;
mod handlers;
mod state;

pub use app::App;
pub use state::{GeneratedPattern, SharedState};

use crate::config::Config;
use crate::i18n::Dictionary;

pub fn create_app(config: Config, dictionary: Dictionary) -> App {
    App::new(config, dictionary)
}

use leptos::prelude::*;
use trello_board::app::App;
use trello_board::config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if console_log::init_with_level(config.log_level).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("starting with default board {}", config.default_board_id);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

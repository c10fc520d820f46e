use anyhow::Result;
use clap::Parser;

use textpattern::args::{Cli, Commands, load_dictionary};
use textpattern::config::Config;
use textpattern::i18n::Locale;
use textpattern::logging::{self, LogConfig};
use textpattern::patterns::text_to_grid;
use textpattern::theme as t;

fn main() -> Result<()> {
    let cli = Cli::parse();
    t::init_color(cli.common.no_color);

    let mut config = Config::load(cli.common.config_path())?;
    cli.common.apply_overrides(&mut config);

    match cli.command {
        Some(Commands::Render { text, on, off }) => {
            logging::init(LogConfig::from_env());
            let grid = text_to_grid(&text.to_uppercase());
            tracing::debug!(text = %text, width = grid.width(), "rendering");
            println!(
                "{}",
                t::grid_text(&grid, on.unwrap_or(config.on_char), off.unwrap_or(config.off_char))
            );
            Ok(())
        }
        Some(Commands::Locales) => {
            for locale in Locale::all() {
                let marker = if locale == config.locale { "*" } else { " " };
                println!("{} {}  {}", marker, t::accent(&locale.to_string()), t::muted(locale.display_name()));
            }
            Ok(())
        }
        Some(Commands::Tui) | None => run_tui(config),
    }
}

#[cfg(feature = "tui")]
fn run_tui(config: Config) -> Result<()> {
    logging::init(LogConfig::from_env().log_to_file(config.log_path()));
    let dictionary = load_dictionary(&config)?;

    let mut app = textpattern::app::create_app(config, dictionary);
    app.run()
}

#[cfg(not(feature = "tui"))]
fn run_tui(config: Config) -> Result<()> {
    // Still surface label-file problems in headless builds.
    load_dictionary(&config)?;
    eprintln!(
        "{}",
        t::error("textpattern was built without the `tui` feature; use `textpattern render <TEXT>`")
    );
    std::process::exit(1);
}

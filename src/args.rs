use crate::config::Config;
use crate::i18n::{Dictionary, I18nError, Locale};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

// Global flags shared across every subcommand.
//
//   -c / --config      Path to a config.toml file
//   --settings-dir     Root state directory override
//   --locale <code>    Label language
//   --labels <path>    TOML file overriding individual dialog labels
//   --no-color         Disable coloured terminal output
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Path to a config.toml file
    #[arg(
        short = 'c',
        long,
        value_name = "PATH",
        env = "TEXTPATTERN_CONFIG",
        global = true
    )]
    pub config: Option<PathBuf>,

    /// Settings directory (default: ~/.textpattern)
    #[arg(
        long,
        value_name = "DIR",
        env = "TEXTPATTERN_SETTINGS_DIR",
        global = true
    )]
    pub settings_dir: Option<PathBuf>,

    /// Label language (en, de, fr, es, ja)
    #[arg(long, value_name = "CODE", env = "TEXTPATTERN_LOCALE", global = true)]
    pub locale: Option<Locale>,

    /// TOML file overriding individual dialog labels
    #[arg(long, value_name = "PATH", global = true)]
    pub labels: Option<PathBuf>,

    /// Disable coloured terminal output
    #[arg(long = "no-color", action = ArgAction::SetTrue, env = "NO_COLOR", global = true)]
    pub no_color: bool,
}

impl CommonArgs {
    pub fn config_path(&self) -> Option<PathBuf> {
        if let Some(config) = &self.config {
            return Some(config.clone());
        }

        self.settings_dir
            .as_ref()
            .map(|settings_dir| settings_dir.join("config.toml"))
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(settings_dir) = &self.settings_dir {
            config.settings_dir = settings_dir.clone();
        }

        if let Some(locale) = self.locale {
            config.locale = locale;
        }

        if let Some(labels) = &self.labels {
            config.labels_path = Some(labels.clone());
        }
    }
}

/// Build the dictionary for the configured locale, applying the label
/// override file when one is set.
pub fn load_dictionary(config: &Config) -> Result<Dictionary, I18nError> {
    let dictionary = Dictionary::for_locale(config.locale);
    match &config.labels_path {
        Some(path) => dictionary.with_overrides_from(&config.resolve(path)),
        None => Ok(dictionary),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "textpattern",
    version,
    about = "textpattern — type text and turn it into a 5x7 dot-matrix pattern"
)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive app (default when no subcommand is given)
    Tui,
    /// Print the dot-matrix pattern for TEXT
    Render {
        /// Text to render (uppercased first)
        text: String,
        /// Character for lit cells
        #[arg(long, value_name = "CHAR")]
        on: Option<char>,
        /// Character for dark cells
        #[arg(long, value_name = "CHAR")]
        off: Option<char>,
    },
    /// List the built-in locales
    Locales,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_subcommand_parses() {
        let cli = Cli::try_parse_from(["textpattern", "render", "hi", "--on", "#", "--locale", "de"])
            .unwrap();
        assert_eq!(cli.common.locale, Some(Locale::De));
        match cli.command {
            Some(Commands::Render { text, on, off }) => {
                assert_eq!(text, "hi");
                assert_eq!(on, Some('#'));
                assert_eq!(off, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        assert!(Cli::try_parse_from(["textpattern", "--locale", "xx"]).is_err());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let args = CommonArgs {
            settings_dir: Some(PathBuf::from("/tmp/tp")),
            locale: Some(Locale::Es),
            labels: Some(PathBuf::from("labels.toml")),
            ..CommonArgs::default()
        };
        assert_eq!(args.config_path(), Some(PathBuf::from("/tmp/tp/config.toml")));

        let mut config = Config::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.settings_dir, PathBuf::from("/tmp/tp"));
        assert_eq!(config.labels_path, Some(PathBuf::from("labels.toml")));
    }

    #[test]
    fn test_load_dictionary_resolves_relative_labels() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("labels.toml"), "[text_modal]\ncancel = \"Nope\"\n").unwrap();
        let config = Config {
            settings_dir: dir.path().to_path_buf(),
            labels_path: Some(PathBuf::from("labels.toml")),
            ..Config::default()
        };
        assert_eq!(load_dictionary(&config).unwrap().text_modal.cancel, "Nope");
    }
}

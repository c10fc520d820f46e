//! Display strings for every supported locale.
//!
//! The dialog reads a fixed set of labels ([`TextModalLabels`]) and renders
//! them verbatim; no formatting or interpolation happens here.

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read label file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse label file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Built-in locales.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
    Fr,
    Es,
    Ja,
}

impl Locale {
    /// Native name of the language.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "Deutsch",
            Self::Fr => "Français",
            Self::Es => "Español",
            Self::Ja => "日本語",
        }
    }

    pub fn all() -> impl Iterator<Item = Locale> {
        Self::iter()
    }
}

/// Labels used by the text-to-pattern dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextModalLabels {
    pub title: String,
    pub description: String,
    pub cancel: String,
    pub placeholder: String,
    pub preview: String,
    pub generate: String,
}

/// Labels used by the host application around the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppLabels {
    pub title: String,
    pub empty: String,
    pub open_hint: String,
    pub quit_hint: String,
    pub history: String,
}

/// All display strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    pub locale: Locale,
    pub text_modal: TextModalLabels,
    pub app: AppLabels,
}

/// Partial label set read from a TOML override file.  Missing fields keep the
/// built-in value.
#[derive(Debug, Default, Deserialize)]
struct LabelOverrides {
    #[serde(default)]
    text_modal: TextModalOverrides,
}

#[derive(Debug, Default, Deserialize)]
struct TextModalOverrides {
    title: Option<String>,
    description: Option<String>,
    cancel: Option<String>,
    placeholder: Option<String>,
    preview: Option<String>,
    generate: Option<String>,
}

fn s(v: &str) -> String {
    v.to_string()
}

impl Dictionary {
    pub fn for_locale(locale: Locale) -> Self {
        let (text_modal, app) = match locale {
            Locale::En => (
                TextModalLabels {
                    title: s("Text to pattern"),
                    description: s("Type some text to turn it into a dot-matrix pattern."),
                    cancel: s("Cancel"),
                    placeholder: s("Enter text…"),
                    preview: s("Preview"),
                    generate: s("Generate"),
                },
                AppLabels {
                    title: s("Pattern"),
                    empty: s("No pattern yet."),
                    open_hint: s("new from text"),
                    quit_hint: s("quit"),
                    history: s("History"),
                },
            ),
            Locale::De => (
                TextModalLabels {
                    title: s("Text zu Muster"),
                    description: s("Gib einen Text ein, um ihn in ein Punktmatrix-Muster umzuwandeln."),
                    cancel: s("Abbrechen"),
                    placeholder: s("Text eingeben…"),
                    preview: s("Vorschau"),
                    generate: s("Erzeugen"),
                },
                AppLabels {
                    title: s("Muster"),
                    empty: s("Noch kein Muster."),
                    open_hint: s("neu aus Text"),
                    quit_hint: s("beenden"),
                    history: s("Verlauf"),
                },
            ),
            Locale::Fr => (
                TextModalLabels {
                    title: s("Texte en motif"),
                    description: s("Saisissez un texte pour le convertir en motif matriciel."),
                    cancel: s("Annuler"),
                    placeholder: s("Saisir du texte…"),
                    preview: s("Aperçu"),
                    generate: s("Générer"),
                },
                AppLabels {
                    title: s("Motif"),
                    empty: s("Aucun motif pour l'instant."),
                    open_hint: s("nouveau depuis un texte"),
                    quit_hint: s("quitter"),
                    history: s("Historique"),
                },
            ),
            Locale::Es => (
                TextModalLabels {
                    title: s("Texto a patrón"),
                    description: s("Escribe un texto para convertirlo en un patrón de matriz de puntos."),
                    cancel: s("Cancelar"),
                    placeholder: s("Introduce texto…"),
                    preview: s("Vista previa"),
                    generate: s("Generar"),
                },
                AppLabels {
                    title: s("Patrón"),
                    empty: s("Todavía no hay patrón."),
                    open_hint: s("nuevo desde texto"),
                    quit_hint: s("salir"),
                    history: s("Historial"),
                },
            ),
            Locale::Ja => (
                TextModalLabels {
                    title: s("テキストからパターン"),
                    description: s("テキストを入力するとドットマトリクスのパターンに変換します。"),
                    cancel: s("キャンセル"),
                    placeholder: s("テキストを入力…"),
                    preview: s("プレビュー"),
                    generate: s("生成"),
                },
                AppLabels {
                    title: s("パターン"),
                    empty: s("パターンはまだありません。"),
                    open_hint: s("テキストから新規"),
                    quit_hint: s("終了"),
                    history: s("履歴"),
                },
            ),
        };
        Self {
            locale,
            text_modal,
            app,
        }
    }

    /// Replace individual dialog labels with the ones found in a TOML file:
    ///
    /// ```toml
    /// [text_modal]
    /// generate = "Make it so"
    /// ```
    pub fn with_overrides_from(mut self, path: &Path) -> Result<Self, I18nError> {
        let content = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let overrides: LabelOverrides =
            toml::from_str(&content).map_err(|source| I18nError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        self.apply(overrides.text_modal);
        Ok(self)
    }

    fn apply(&mut self, o: TextModalOverrides) {
        let labels = &mut self.text_modal;
        let fields = [
            (&mut labels.title, o.title),
            (&mut labels.description, o.description),
            (&mut labels.cancel, o.cancel),
            (&mut labels.placeholder, o.placeholder),
            (&mut labels.preview, o.preview),
            (&mut labels.generate, o.generate),
        ];
        for (slot, value) in fields {
            if let Some(v) = value {
                *slot = v;
            }
        }
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

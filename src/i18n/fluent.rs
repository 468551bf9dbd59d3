// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else resolves.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded translations, then any `.ftl` files found in
    /// `i18n_dir`, which replace embedded bundles of the same locale.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
                bundles.insert(locale.clone(), build_bundle(locale, source));
            }
        }

        if let Some(dir) = i18n_dir {
            load_directory(Path::new(&dir), &mut bundles);
        }

        let mut available_locales: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting `{ $name }` placeables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename
        .strip_suffix(".ftl")
        .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
}

fn build_bundle(locale: LanguageIdentifier, source: String) -> FluentBundle<FluentResource> {
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((partial, errors)) => {
            tracing::warn!(%locale, errors = errors.len(), "translation file has syntax errors");
            partial
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Keep rendered strings free of Unicode isolation marks.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, errors = errors.len(), "duplicate translation keys");
    }
    bundle
}

fn load_directory(
    dir: &Path,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "translation directory unreadable");
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(locale) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_from_filename)
        else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(source) => {
                bundles.insert(locale.clone(), build_bundle(locale, source));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "translation file unreadable");
            }
        }
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config.general.language.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().as_deref().and_then(pick)
}

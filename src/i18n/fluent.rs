// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            if let Ok(resource) = FluentResource::try_new(source) {
                let mut bundle = FluentBundle::new(vec![locale.clone()]);
                if bundle.add_resource(resource).is_ok() {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
            }
        }

        available_locales.sort();

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap_or_default();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Resolves `key` in the current locale.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Resolves `key` with interpolation arguments, e.g. `$min` in
    /// `validation-too-short`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(message) = bundle.get_message(key) {
                if let Some(pattern) = message.value() {
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

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_locales_are_discovered() {
        let i18n = I18n::default();
        let en: LanguageIdentifier = "en-US".parse().expect("valid locale");
        let pt: LanguageIdentifier = "pt-BR".parse().expect("valid locale");
        assert!(i18n.available_locales.contains(&en));
        assert!(i18n.available_locales.contains(&pt));
    }

    #[test]
    fn cli_language_takes_precedence_over_config() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let i18n = I18n::new(Some("pt-BR".to_string()), &config);
        assert_eq!(i18n.current_locale().to_string(), "pt-BR");
    }

    #[test]
    fn config_language_is_used_without_cli_override() {
        let config = Config {
            language: Some("pt-BR".to_string()),
            ..Config::default()
        };
        let i18n = I18n::new(None, &config);
        assert_eq!(i18n.current_locale().to_string(), "pt-BR");
    }

    #[test]
    fn unknown_locale_is_not_selectable() {
        let mut i18n = I18n::default();
        let before = i18n.current_locale().clone();
        i18n.set_locale("zz-ZZ".parse().expect("syntactically valid"));
        assert_eq!(*i18n.current_locale(), before);
    }

    #[test]
    fn missing_keys_are_marked() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.tr("definitely-not-a-key"),
            "MISSING: definitely-not-a-key"
        );
    }

    #[test]
    fn arguments_are_interpolated() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let i18n = I18n::new(None, &config);
        let message = i18n.tr_with_args("validation-too-short", &[("min", "2")]);
        assert!(message.contains('2'), "expected the bound in: {message}");
    }
}

/**
 * Localization Store
 *
 * Maps locale-independent keys (e.g. `sessions.create.incorrect_details`)
 * to display strings. Strings live in `locales/en.toml`, which is embedded
 * at compile time and flattened into dotted keys at startup.
 *
 * # Lookup Semantics
 *
 * A missing key resolves to a visible `translation missing: <key>` marker
 * instead of panicking, so a typo in a handler shows up on the page and in
 * tests rather than taking the request down.
 */

use std::collections::HashMap;

/// Embedded default locale. Kept as a single file; additional locales
/// would be selected here by a config switch.
const EN: &str = include_str!("../../locales/en.toml");

/// Flattened key/string table for one locale.
#[derive(Debug, Clone)]
pub struct Locales {
    strings: HashMap<String, String>,
}

impl Locales {
    /// Load the embedded English locale.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. The file is part of the
    /// binary, so this is a build defect, not a runtime condition.
    pub fn load_default() -> Self {
        let table: toml::Table = EN.parse().expect("locales/en.toml is not valid TOML");
        let mut strings = HashMap::new();
        flatten("", &table, &mut strings);
        Self { strings }
    }

    /// Resolve `key` to its display string.
    pub fn t(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(s) => s.clone(),
            None => {
                tracing::warn!("missing translation for key: {key}");
                format!("translation missing: {key}")
            }
        }
    }

    /// True if `key` has a translation.
    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }
}

/// Recursively flatten nested TOML tables into `a.b.c` keys.
fn flatten(prefix: &str, table: &toml::Table, out: &mut HashMap<String, String>) {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::Table(inner) => flatten(&key, inner, out),
            toml::Value::String(s) => {
                out.insert(key, s.clone());
            }
            other => {
                // Non-string leaves are stringified rather than dropped.
                out.insert(key, other.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_embedded_locale() {
        let locales = Locales::load_default();
        assert!(locales.contains("app_name"));
        assert!(locales.contains("sessions.create.incorrect_details"));
        assert!(locales.contains("sessions.destroy.success"));
    }

    #[test]
    fn test_resolves_nested_key() {
        let locales = Locales::load_default();
        let message = locales.t("sessions.destroy.success");
        assert!(!message.is_empty());
        assert!(!message.starts_with("translation missing"));
    }

    #[test]
    fn test_missing_key_is_visible() {
        let locales = Locales::load_default();
        assert_eq!(
            locales.t("sessions.create.no_such_key"),
            "translation missing: sessions.create.no_such_key"
        );
    }
}

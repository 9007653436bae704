//! BEM-style modifier class names.
//!
//! A component with base class `button` and modifiers `["primary", "wide"]`
//! renders as `button--primary button--wide`. Modifiers carrying the icon
//! prefix (`i-` by default) are reserved for icons and skipped by
//! [`get_class_mods`]; [`get_icon_class_mods`] extracts them instead.

use bon::Builder;

pub const DEFAULT_DIVIDER: &str = "--";
pub const DEFAULT_ICON_PREFIX: &str = "i-";

/// Zero, one or many modifier names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassMods {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl ClassMods {
    /// True for `None` and for an empty single modifier.
    pub fn is_empty(&self) -> bool {
        match self {
            ClassMods::None => true,
            ClassMods::One(mod_name) => mod_name.is_empty(),
            ClassMods::Many(_) => false,
        }
    }
}

impl From<&str> for ClassMods {
    fn from(value: &str) -> Self {
        ClassMods::One(value.to_string())
    }
}

impl From<String> for ClassMods {
    fn from(value: String) -> Self {
        ClassMods::One(value)
    }
}

impl From<Vec<String>> for ClassMods {
    fn from(value: Vec<String>) -> Self {
        ClassMods::Many(value)
    }
}

impl From<Vec<&str>> for ClassMods {
    fn from(value: Vec<&str>) -> Self {
        ClassMods::Many(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ClassMods {
    fn from(value: &[&str]) -> Self {
        ClassMods::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ClassMods {
    fn from(value: [&str; N]) -> Self {
        ClassMods::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<T: Into<ClassMods>> From<Option<T>> for ClassMods {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Options for [`get_class_mods`].
///
/// ```
/// use frontutils::ClassModsOptions;
///
/// let options = ClassModsOptions::builder().divider("__").build();
/// assert_eq!(options.divider(), "__");
/// assert_eq!(options.ignore_prefix(), "i-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ClassModsOptions {
    /// Placed between the base class and each modifier. Defaults to `--`.
    #[builder(into, default = String::from(DEFAULT_DIVIDER))]
    divider: String,
    /// Modifiers starting with this prefix are left out. Defaults to `i-`.
    #[builder(into, default = String::from(DEFAULT_ICON_PREFIX))]
    ignore_prefix: String,
}

impl ClassModsOptions {
    pub fn divider(&self) -> &str {
        &self.divider
    }

    pub fn ignore_prefix(&self) -> &str {
        &self.ignore_prefix
    }
}

impl Default for ClassModsOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builds the modifier classes for `prefix`.
///
/// Multiple modifiers are separated by a single space. Returns an empty string
/// when there is nothing to render.
///
/// ```
/// use frontutils::{get_class_mods, ClassModsOptions};
///
/// let options = ClassModsOptions::default();
/// assert_eq!(get_class_mods("btn", "primary", &options), "btn--primary");
/// assert_eq!(
///     get_class_mods("btn", ["primary", "i-close", "wide"], &options),
///     "btn--primary btn--wide"
/// );
/// assert_eq!(get_class_mods("btn", None::<&str>, &options), "");
/// ```
pub fn get_class_mods(
    prefix: &str,
    mods: impl Into<ClassMods>,
    options: &ClassModsOptions,
) -> String {
    let render = |mod_name: &str| format!("{prefix}{}{mod_name}", options.divider);
    let keep = |mod_name: &&str| !mod_name.starts_with(options.ignore_prefix.as_str());

    match mods.into() {
        ClassMods::None => String::new(),
        ClassMods::One(mod_name) => Some(mod_name.as_str())
            .filter(|m| !m.is_empty())
            .filter(keep)
            .map(render)
            .unwrap_or_default(),
        ClassMods::Many(mods) => mods
            .iter()
            .map(String::as_str)
            .filter(keep)
            .map(render)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Extracts icon modifiers, stripping `prefix` from each.
///
/// A single modifier produces [`ClassMods::One`] or [`ClassMods::None`]; a list
/// produces [`ClassMods::Many`] with only the prefixed entries.
///
/// ```
/// use frontutils::{get_icon_class_mods, ClassMods};
///
/// assert_eq!(get_icon_class_mods("i-close", "i-"), ClassMods::One("close".into()));
/// assert_eq!(get_icon_class_mods("primary", "i-"), ClassMods::None);
/// assert_eq!(
///     get_icon_class_mods(vec!["i-arrow", "wide", "i-left"], "i-"),
///     ClassMods::Many(vec!["arrow".into(), "left".into()])
/// );
/// ```
pub fn get_icon_class_mods(mods: impl Into<ClassMods>, prefix: &str) -> ClassMods {
    match mods.into() {
        ClassMods::None => ClassMods::None,
        ClassMods::One(mod_name) => mod_name
            .strip_prefix(prefix)
            .map(|icon| ClassMods::One(icon.to_string()))
            .unwrap_or_default(),
        ClassMods::Many(mods) => ClassMods::Many(
            mods.iter()
                .filter_map(|mod_name| mod_name.strip_prefix(prefix))
                .map(str::to_string)
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_modifier() {
        let options = ClassModsOptions::default();
        assert_eq!(get_class_mods("card", "active", &options), "card--active");
        assert_eq!(get_class_mods("card", String::from("flat"), &options), "card--flat");
    }

    #[test]
    fn empty_and_missing_modifiers_render_nothing() {
        let options = ClassModsOptions::default();
        assert_eq!(get_class_mods("card", "", &options), "");
        assert_eq!(get_class_mods("card", ClassMods::None, &options), "");
        assert_eq!(get_class_mods("card", Vec::<String>::new(), &options), "");
    }

    #[test]
    fn icon_modifiers_are_skipped() {
        let options = ClassModsOptions::default();
        assert_eq!(get_class_mods("card", "i-star", &options), "");
        assert_eq!(
            get_class_mods("card", vec!["i-star", "big", "i-x"], &options),
            "card--big"
        );
    }

    #[test]
    fn custom_divider_and_ignore_prefix() {
        let options = ClassModsOptions::builder()
            .divider("_")
            .ignore_prefix("icon:")
            .build();
        assert_eq!(
            get_class_mods("menu", ["open", "icon:burger", "i-kept"], &options),
            "menu_open menu_i-kept"
        );
    }

    #[test]
    fn icon_mods_from_single_and_list() {
        assert_eq!(
            get_icon_class_mods("i-search", DEFAULT_ICON_PREFIX),
            ClassMods::One("search".into())
        );
        assert_eq!(get_icon_class_mods("", DEFAULT_ICON_PREFIX), ClassMods::None);
        assert_eq!(get_icon_class_mods(None::<String>, DEFAULT_ICON_PREFIX), ClassMods::None);
        assert_eq!(
            get_icon_class_mods(vec!["big"], DEFAULT_ICON_PREFIX),
            ClassMods::Many(Vec::new())
        );
    }

    #[test]
    fn icon_prefix_is_only_stripped_at_the_start() {
        assert_eq!(
            get_icon_class_mods("i-wi-fi", "i-"),
            ClassMods::One("wi-fi".into())
        );
        assert_eq!(get_icon_class_mods("wi-fi", "i-"), ClassMods::None);
    }

    #[test]
    fn emptiness() {
        assert!(ClassMods::None.is_empty());
        assert!(ClassMods::from("").is_empty());
        assert!(!ClassMods::from("x").is_empty());
        assert!(!ClassMods::Many(Vec::new()).is_empty());
    }
}

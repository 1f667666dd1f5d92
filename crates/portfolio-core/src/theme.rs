//! Light/dark theme flag. In memory only; every launch starts dark.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value of the `data-theme` attribute.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Class placed on `<html>` while this theme is active.
    pub fn document_class(&self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    /// Label for the toggle button (names the theme it switches to).
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn css_values() {
        assert_eq!(Theme::Dark.css_value(), "dark");
        assert_eq!(Theme::Light.document_class(), "theme-light");
    }
}

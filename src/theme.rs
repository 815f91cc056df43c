pub const THEME_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const BODY_TRANSITION: &str = "background-color 0.3s ease, color 0.3s ease";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme to use on page load given whatever storage returned.
    pub fn resolve(stored: Option<&str>) -> Self {
        stored.and_then(Self::from_str).unwrap_or_default()
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_preference_resolves_to_light() {
        assert_eq!(Theme::resolve(None), Theme::Light);
    }

    #[test]
    fn stored_preference_is_honoured() {
        assert_eq!(Theme::resolve(Some("dark")), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light")), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        assert_eq!(Theme::resolve(Some("sepia")), Theme::Light);
        assert_eq!(Theme::resolve(Some("")), Theme::Light);
        assert_eq!(Theme::resolve(Some(" dark ")), Theme::Light);
    }

    #[test]
    fn toggle_flips_between_the_two_modes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn icon_points_at_the_other_mode() {
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
    }

    #[test]
    fn toggle_button_describes_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert!(!Theme::Light.pressed());
        assert!(Theme::Dark.pressed());
    }
}

use wasm_bindgen::JsValue;

/// Class put on `<body>` while dark mode is on.
pub const DARK_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Class for a theme button: only the active theme's button is selected.
    pub fn button_class(self, active: Theme) -> &'static str {
        if self == active {
            "theme-btn selected"
        } else {
            "theme-btn"
        }
    }
}

/// Adds or removes the dark-mode class on the document body.
pub fn apply_to_body(theme: Theme) -> Result<(), JsValue> {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("document body not available"))?;
    let classes = body.class_list();
    match theme {
        Theme::Dark => classes.add_1(DARK_CLASS),
        Theme::Light => classes.remove_1(DARK_CLASS),
    }
}

use yew::AttrValue;

pub const DEFAULT_LOGO_SRC: &str = "logo.svg";
pub const DEFAULT_LOGO_ALT: &str = "logo";
pub const DEFAULT_SOURCE_FILE: &str = "src/bin/tallyx/main.rs";
pub const DEFAULT_BUTTON_LABEL: &str = "increment";

/// Static text and assets shown around the counter.
#[derive(Debug, PartialEq, Clone)]
pub struct PageContent {
    pub logo_src: AttrValue,
    pub logo_alt: AttrValue,
    pub source_file: AttrValue,
    pub button_label: AttrValue,
}

impl Default for PageContent {
    fn default() -> Self {
        PageContent {
            logo_src: AttrValue::Static(DEFAULT_LOGO_SRC),
            logo_alt: AttrValue::Static(DEFAULT_LOGO_ALT),
            source_file: AttrValue::Static(DEFAULT_SOURCE_FILE),
            button_label: AttrValue::Static(DEFAULT_BUTTON_LABEL),
        }
    }
}

impl PageContent {
    pub fn with_button_label(mut self, label: impl Into<AttrValue>) -> Self {
        self.button_label = label.into();
        self
    }

    pub fn with_logo(mut self, src: impl Into<AttrValue>, alt: impl Into<AttrValue>) -> Self {
        self.logo_src = src.into();
        self.logo_alt = alt.into();
        self
    }
}

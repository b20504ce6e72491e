use leptos::*;

const ENABLED_CLASS: &str =
    "bg-tertiary py-3 px-6 w-fit text-white font-bold rounded-xl shadow-md \
     shadow-primary hover:bg-secondary transition-colors";
const DISABLED_CLASS: &str =
    "bg-tertiary py-3 px-6 w-fit text-secondary font-bold rounded-xl \
     shadow-md shadow-primary cursor-not-allowed";

#[derive(Clone, Debug, PartialEq)]
pub struct FormButton {
    enabled: bool,
    text: String,
}

impl FormButton {
    pub fn new(text: &str) -> Self {
        Self {
            enabled: true, // default
            text: text.to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn button_class(&self) -> &'static str {
        if self.enabled {
            ENABLED_CLASS
        } else {
            DISABLED_CLASS
        }
    }

    pub fn into_view(self) -> View {
        view! {
            <button
                type="submit"
                class=self.button_class()
                disabled={!self.is_enabled()}
            >
                {self.text}
            </button>
        }
        .into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_button() {
        let button = FormButton::new("Sending...").set_enabled(false);
        assert!(!button.is_enabled());
        assert_eq!(button.text(), "Sending...");
        assert!(button.button_class().contains("cursor-not-allowed"));
    }

    #[test]
    fn test_enabled_by_default() {
        let button = FormButton::new("Send Message");
        assert!(button.is_enabled());
        assert!(!button.button_class().contains("cursor-not-allowed"));
    }
}

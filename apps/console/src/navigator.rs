use catalog_config::join_url;
use catalog_registration::Navigator;

/// Prints the confirmation and the login view the user should open next.
pub struct TerminalNavigator {
    base_url: String,
}

impl TerminalNavigator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn confirm(&self, message: &str) {
        println!("{message}");
    }

    fn navigate(&self, route: &str) {
        println!("→ login view: {}", join_url(&self.base_url, route));
    }
}

/// Replaces the home directory with `~` in audit output.
pub fn redact_home(text: &str) -> String {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() && home != "/" {
            return text.replace(&home, "~");
        }
    }
    text.to_string()
}

//! Rendering helpers shared by the commands.

const VISIBLE_PREFIX: usize = 4;
const MASK: &str = "****";

/// Hide all but a short prefix of a secret.
///
/// Values too short to keep a prefix are fully masked; empty stays empty.
pub fn mask(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if value.chars().count() <= VISIBLE_PREFIX * 2 {
        return MASK.to_string();
    }
    let prefix: String = value.chars().take(VISIBLE_PREFIX).collect();
    format!("{prefix}{MASK}")
}

/// Masked unless `reveal` is set.
pub fn display_value(value: &str, reveal: bool) -> String {
    if reveal {
        value.to_string()
    } else {
        mask(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_prefix() {
        assert_eq!(mask("AKIAI44QH8DHBEXAMPLE"), "AKIA****");
    }

    #[test]
    fn test_mask_short_and_empty() {
        assert_eq!(mask("short"), "****");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn test_mask_multibyte() {
        assert_eq!(mask("ééééééééé"), "éééé****");
    }

    #[test]
    fn test_reveal() {
        assert_eq!(display_value("secret-value", true), "secret-value");
        assert_eq!(display_value("secret-value", false), "secr****");
    }
}

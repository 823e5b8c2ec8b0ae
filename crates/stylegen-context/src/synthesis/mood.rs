//! Mood line heuristic.
//!
//! Tone is read from the first hex digit of the background: `0` or `1` is
//! dark, anything else (including non-hex values) is light. This is a
//! coarse proxy, not a luminance computation; `#2A2A2A` reads as light.

pub fn mood(background: &str, textured: bool) -> String {
    let tone = if is_dark(background) { "dark" } else { "light" };
    if textured {
        format!("textured {tone}")
    } else {
        tone.to_string()
    }
}

fn is_dark(background: &str) -> bool {
    background
        .trim()
        .strip_prefix('#')
        .and_then(|hex| hex.chars().next())
        .is_some_and(|c| c == '0' || c == '1')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_from_first_digit() {
        assert_eq!(mood("#0A1018", false), "dark");
        assert_eq!(mood("#1c1c1c", false), "dark");
        assert_eq!(mood("#F4EFE6", false), "light");
        assert_eq!(mood("black", false), "light");
    }

    #[test]
    fn test_mid_tone_misclassification_is_preserved() {
        assert_eq!(mood("#2A2A2A", false), "light");
    }

    #[test]
    fn test_grain_adds_texture_prefix() {
        assert_eq!(mood("#0a0a0a", true), "textured dark");
        assert_eq!(mood("#fafafa", true), "textured light");
    }
}

/// Text for the character counter under the message box, e.g. `12 / 500`
pub fn character_counter(text: &str, max: usize) -> String {
    format!("{} / {}", text.chars().count(), max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(character_counter("", 500), "0 / 500");
        assert_eq!(character_counter("héllo", 500), "5 / 500");
    }
}

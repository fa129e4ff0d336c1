//! Case inversion: swaps ASCII upper- and lowercase letters.

pub fn invert(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_upper_and_lower() {
        assert_eq!(invert("Hello"), "hELLO");
        assert_eq!(invert("rUST"), "Rust");
    }

    #[test]
    fn non_letters_are_untouched() {
        assert_eq!(invert("a-1 B!"), "A-1 b!");
        assert_eq!(invert(""), "");
    }

    #[test]
    fn inverting_twice_restores_the_input() {
        let text = "MiXeD CaSe 123";
        assert_eq!(invert(&invert(text)), text);
    }
}

//! Letter-rotation (Caesar) cipher over ASCII text.
//!
//! Rotating by a negative amount undoes a forward rotation, and rotating by
//! [`ROT13`] twice is the identity.

/// Rotation that is its own inverse over the 26-letter alphabet.
pub const ROT13: i32 = 13;

const ALPHABET_LEN: i32 = 26;

/// Rotates a single letter, preserving case. Non-ASCII-alphabetic characters
/// pass through untouched.
pub fn rotate_char(c: char, rotation: i32) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }

    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    let offset = i32::from(c as u8 - base);
    let rotated = (offset + rotation).rem_euclid(ALPHABET_LEN) as u8;
    (base + rotated) as char
}

/// Rotates every letter of `text` by the same amount.
pub fn rotate(text: &str, rotation: i32) -> String {
    text.chars().map(|c| rotate_char(c, rotation)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(rotate_char('!', 2), '!');
        assert_eq!(rotate_char('4', 3), '4');
    }

    #[test]
    fn forward_rotation_wraps_around() {
        assert_eq!(rotate_char('a', 1), 'b');
        assert_eq!(rotate_char('a', 2), 'c');
        assert_eq!(rotate_char('x', 2), 'z');
        assert_eq!(rotate_char('z', 1), 'a');
    }

    #[test]
    fn backward_rotation_wraps_around() {
        assert_eq!(rotate_char('b', -1), 'a');
        assert_eq!(rotate_char('c', -2), 'a');
        assert_eq!(rotate_char('z', -2), 'x');
        assert_eq!(rotate_char('a', -1), 'z');
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(rotate_char('B', -1), 'A');
        assert_eq!(rotate_char('Z', 1), 'A');
        assert_eq!(rotate("Hello, World!", 1), "Ifmmp, Xpsme!");
    }

    #[test]
    fn rot13_is_an_involution() {
        let text = "The quick brown Fox, 42!";
        assert_eq!(rotate(&rotate(text, ROT13), ROT13), text);
    }

    #[test]
    fn rotations_larger_than_the_alphabet_wrap() {
        assert_eq!(rotate_char('a', 27), 'b');
        assert_eq!(rotate_char('a', -27), 'z');
    }
}

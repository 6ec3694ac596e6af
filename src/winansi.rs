//! WinAnsiEncoding for text shown with the standard Type1 fonts
//!
//! Domains and recommendation text arrive as UTF-8. Latin-1 characters map
//! onto themselves, the 0x80-0x9F block carries the typographic extras
//! (quotes, dashes, bullet, euro sign), and everything else becomes '?'.

/// Encode a single character, '?' when it has no WinAnsi code
pub fn to_winansi_char(ch: char) -> u8 {
    match ch as u32 {
        0x20..=0x7E => ch as u8,
        0xA0..=0xFF => ch as u8,
        _ => match ch {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            // Tabs and stray control characters render as a plain space
            '\t' | '\n' | '\r' => b' ',
            _ => b'?',
        },
    }
}

/// Convert a UTF-8 string to WinAnsiEncoding bytes
pub fn to_winansi(text: &str) -> Vec<u8> {
    text.chars().map(to_winansi_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        let text = "Rank: #2 of 4";
        assert_eq!(to_winansi(text), text.as_bytes());
    }

    #[test]
    fn test_typographic_characters() {
        assert_eq!(to_winansi("• “a” – b"), vec![0x95, b' ', 0x93, b'a', 0x94, b' ', 0x96, b' ', b'b']);
    }

    #[test]
    fn test_latin1_passthrough() {
        assert_eq!(to_winansi("café"), vec![b'c', b'a', b'f', 0xE9]);
    }

    #[test]
    fn test_unmappable_becomes_question_mark() {
        assert_eq!(to_winansi("日本"), vec![b'?', b'?']);
        assert_eq!(to_winansi_char('📊'), b'?');
    }
}

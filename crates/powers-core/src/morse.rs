//! International Morse encoding of layer names.
//!
//! Output follows the on-screen format: letters are separated by one space and
//! a space in the source text becomes ` / `, so a word gap renders as
//! `"  /  "`. Characters without a code pass through unchanged.

const MORSE_TABLE: [(char, &str); 36] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

const WORD_GAP: &str = " / ";

/// Code for a single (already uppercased) character, if it has one.
#[inline]
pub fn symbol_for(c: char) -> Option<&'static str> {
    if c == ' ' {
        return Some(WORD_GAP);
    }
    MORSE_TABLE
        .iter()
        .find(|(k, _)| *k == c)
        .map(|(_, code)| *code)
}

#[inline]
fn char_for(symbol: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|(_, code)| *code == symbol)
        .map(|(k, _)| *k)
}

pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    for (i, c) in text.to_uppercase().chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match symbol_for(c) {
            Some(code) => out.push_str(code),
            None => out.push(c),
        }
    }
    out
}

/// Inverse of [`encode`] for text made of table characters and spaces.
///
/// Tokens are whitespace separated; `/` is a word gap and unknown tokens are
/// copied through as-is. The result is uppercase.
pub fn decode(code: &str) -> String {
    code.split_whitespace()
        .map(|token| match token {
            "/" => " ".to_string(),
            t => char_for(t).map_or_else(|| t.to_string(), |c| c.to_string()),
        })
        .collect()
}

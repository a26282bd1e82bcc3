// Character-set constants
#[cfg(test)]
pub(crate) const UPPERCASE_ALPHABET: std::ops::RangeInclusive<char> = 'A'..='Z';
#[cfg(test)]
pub(crate) const LOWERCASE_ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// Legacy cell input that toggles a block instead of writing a letter.
pub const BLOCK_SENTINEL: char = '#';

/// Cell inputs that clear the current letter.
pub const EMPTY_PLACEHOLDERS: [char; 3] = [' ', '.', '?'];

pub trait GridChar {
    fn is_block_sentinel(&self) -> bool;
    fn is_empty_placeholder(&self) -> bool;
    fn is_fillable_letter(&self) -> bool;
}

impl GridChar for char {
    fn is_block_sentinel(&self) -> bool {
        *self == BLOCK_SENTINEL
    }
    fn is_empty_placeholder(&self) -> bool {
        EMPTY_PLACEHOLDERS.contains(self)
    }
    fn is_fillable_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }
}

/// The stored form of a cell letter: uppercase ASCII, or `None` if `ch` is not a letter.
#[must_use]
pub fn normalize_letter(ch: char) -> Option<char> {
    ch.is_fillable_letter().then(|| ch.to_ascii_uppercase())
}

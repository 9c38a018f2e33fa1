/*
 * Character Codes
 *
 * Character constants and classification helpers shared by the converters
 */

// Special characters
pub const TAB: char = '\t';
pub const NEWLINE: char = '\n';
pub const VTAB: char = '\x0B';
pub const FF: char = '\x0C';
pub const CR: char = '\r'; // Carriage return
pub const SPACE: char = ' ';
pub const NBSP: char = '\u{00A0}';

// Punctuation
pub const BANG: char = '!';
pub const DQ: char = '"';
pub const HASH: char = '#';
pub const AMPERSAND: char = '&';
pub const SQ: char = '\'';
pub const MINUS: char = '-';
pub const PERIOD: char = '.';
pub const SLASH: char = '/';
pub const COLON: char = ':';
pub const LT: char = '<';
pub const EQ: char = '=';
pub const GT: char = '>';
pub const CARET: char = '^';
pub const UNDERSCORE: char = '_';

/// Check if character is whitespace (ASCII whitespace plus NBSP)
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, SPACE | TAB | NEWLINE | CR | VTAB | FF | NBSP)
}

/// Check if character is a digit
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if character is ASCII letter
pub fn is_ascii_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Check if character is a quote usable around attribute values
pub fn is_quote(ch: char) -> bool {
    ch == SQ || ch == DQ
}

/// Check if character can start a tag name
pub fn is_tag_name_start(ch: char) -> bool {
    is_ascii_letter(ch)
}

/// Check if character can continue a tag name (`my-widget`, `svg:path`, `x.y`)
pub fn is_tag_name_char(ch: char) -> bool {
    is_ascii_letter(ch) || is_digit(ch) || matches!(ch, MINUS | COLON | PERIOD | UNDERSCORE)
}

/// Check if character ends an attribute name
pub fn is_attribute_name_end(ch: char) -> bool {
    is_whitespace(ch) || matches!(ch, EQ | GT | SLASH | DQ | SQ)
}

//! Sequel-numeral handling.
//!
//! Sequels show up in three numeral systems across filenames and catalogs:
//! `最终幻想三`, `Final Fantasy III`, `最终幻想3`. Folding all of them to
//! Arabic digits lets the matcher treat them as the same title, and the
//! extracted token sets guard against cross-sequel matches
//! (`VI` vs `VII` must not score as near-identical).

use std::collections::BTreeSet;

const CHINESE_DIGITS: &[(char, u32)] = &[
    ('零', 0),
    ('一', 1),
    ('二', 2),
    ('两', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
];

fn chinese_digit(c: char) -> Option<u32> {
    CHINESE_DIGITS.iter().find(|(d, _)| *d == c).map(|(_, v)| *v)
}

fn is_chinese_numeral_char(c: char) -> bool {
    c == '十' || (chinese_digit(c).is_some() && c != '零')
}

/// Convert a run of Chinese numeral characters to an integer.
///
/// Handles the 十-positional forms up to 99: 十 = 10, 二十 = 20, 十五 = 15,
/// 二十五 = 25. Returns `None` for runs that don't form a number.
pub fn chinese_numeral_to_int(token: &str) -> Option<u32> {
    let chars: Vec<char> = token.chars().collect();
    match chars.as_slice() {
        [] => None,
        ['十'] => Some(10),
        [c] => chinese_digit(*c),
        _ => {
            let pos = chars.iter().position(|&c| c == '十')?;
            let tens = if pos == 0 {
                1
            } else if pos == 1 {
                chinese_digit(chars[0])?
            } else {
                return None;
            };
            let ones = match chars.get(pos + 1) {
                None => 0,
                Some(&c) if chars.len() == pos + 2 => chinese_digit(c)?,
                Some(_) => return None,
            };
            Some(tens * 10 + ones)
        }
    }
}

/// Convert a Roman numeral word (I through X) to an integer.
pub fn roman_to_int(token: &str) -> Option<u32> {
    match token.to_ascii_uppercase().as_str() {
        "I" => Some(1),
        "II" => Some(2),
        "III" => Some(3),
        "IV" => Some(4),
        "V" => Some(5),
        "VI" => Some(6),
        "VII" => Some(7),
        "VIII" => Some(8),
        "IX" => Some(9),
        "X" => Some(10),
        _ => None,
    }
}

/// A lexical segment of a title string.
enum Segment<'a> {
    /// Run of ASCII alphanumerics (a "word"; digits count as word chars,
    /// so `X4` is one word and its `X` is not a standalone Roman numeral).
    Word(&'a str),
    /// Run of Chinese numeral characters.
    Chinese(&'a str),
    /// Anything else, passed through verbatim.
    Other(&'a str),
}

fn segments(s: &str) -> Vec<Segment<'_>> {
    #[derive(PartialEq, Clone, Copy)]
    enum Kind {
        Word,
        Chinese,
        Other,
    }
    let kind_of = |c: char| {
        if c.is_ascii_alphanumeric() {
            Kind::Word
        } else if is_chinese_numeral_char(c) {
            Kind::Chinese
        } else {
            Kind::Other
        }
    };

    let mut out = Vec::new();
    let mut start = 0;
    let mut current: Option<Kind> = None;

    for (i, c) in s.char_indices() {
        let k = kind_of(c);
        match current {
            Some(cur) if cur == k => {}
            Some(cur) => {
                out.push(make_segment(cur == Kind::Word, cur == Kind::Chinese, &s[start..i]));
                start = i;
                current = Some(k);
            }
            None => current = Some(k),
        }
    }
    if let Some(cur) = current {
        out.push(make_segment(cur == Kind::Word, cur == Kind::Chinese, &s[start..]));
    }
    out
}

fn make_segment(word: bool, chinese: bool, text: &str) -> Segment<'_> {
    if word {
        Segment::Word(text)
    } else if chinese {
        Segment::Chinese(text)
    } else {
        Segment::Other(text)
    }
}

/// Rewrite Chinese-numeral runs and standalone Roman-numeral words as
/// Arabic digits. Everything else passes through unchanged.
pub fn fold_numerals(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for seg in segments(s) {
        match seg {
            Segment::Word(w) => match roman_to_int(w) {
                Some(v) => out.push_str(&v.to_string()),
                None => out.push_str(w),
            },
            Segment::Chinese(run) => match chinese_numeral_to_int(run) {
                Some(v) => out.push_str(&v.to_string()),
                None => out.push_str(run),
            },
            Segment::Other(t) => out.push_str(t),
        }
    }
    out
}

/// Extract the set of sequel numbers (1–99) appearing in a string, across
/// Arabic digits, Chinese numerals, and standalone Roman numerals.
///
/// Digit runs longer than two (years, serial codes) are not sequel numbers.
pub fn sequel_tokens(s: &str) -> BTreeSet<u8> {
    let mut tokens = BTreeSet::new();

    let mut add = |v: u32| {
        if (1..=99).contains(&v) {
            tokens.insert(v as u8);
        }
    };

    for seg in segments(s) {
        match seg {
            Segment::Word(w) => {
                if let Some(v) = roman_to_int(w) {
                    add(v);
                    continue;
                }
                // Digit runs inside the word (e.g. "X4", "FF7")
                let mut digits = String::new();
                for c in w.chars().chain(std::iter::once(' ')) {
                    if c.is_ascii_digit() {
                        digits.push(c);
                    } else if !digits.is_empty() {
                        if digits.len() <= 2 {
                            if let Ok(v) = digits.parse::<u32>() {
                                add(v);
                            }
                        }
                        digits.clear();
                    }
                }
            }
            Segment::Chinese(run) => {
                if let Some(v) = chinese_numeral_to_int(run) {
                    add(v);
                }
            }
            Segment::Other(_) => {}
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_numerals() {
        assert_eq!(chinese_numeral_to_int("三"), Some(3));
        assert_eq!(chinese_numeral_to_int("两"), Some(2));
        assert_eq!(chinese_numeral_to_int("十"), Some(10));
        assert_eq!(chinese_numeral_to_int("十五"), Some(15));
        assert_eq!(chinese_numeral_to_int("二十"), Some(20));
        assert_eq!(chinese_numeral_to_int("二十五"), Some(25));
        assert_eq!(chinese_numeral_to_int("abc"), None);
        assert_eq!(chinese_numeral_to_int(""), None);
    }

    #[test]
    fn test_roman_numerals() {
        assert_eq!(roman_to_int("VII"), Some(7));
        assert_eq!(roman_to_int("vii"), Some(7));
        assert_eq!(roman_to_int("IX"), Some(9));
        assert_eq!(roman_to_int("XI"), None);
        assert_eq!(roman_to_int("mix"), None);
    }

    #[test]
    fn test_fold_numerals() {
        assert_eq!(fold_numerals("最终幻想三"), "最终幻想3");
        assert_eq!(fold_numerals("final fantasy vii"), "final fantasy 7");
        assert_eq!(fold_numerals("Dragon Quest IV"), "Dragon Quest 4");
        assert_eq!(fold_numerals("勇者斗恶龙十一"), "勇者斗恶龙11");
        // Words that merely contain numeral letters stay intact
        assert_eq!(fold_numerals("vixen"), "vixen");
        assert_eq!(fold_numerals("Mega Man X4"), "Mega Man X4");
    }

    #[test]
    fn test_sequel_tokens() {
        assert_eq!(sequel_tokens("最终幻想7"), BTreeSet::from([7]));
        assert_eq!(sequel_tokens("Final Fantasy VII"), BTreeSet::from([7]));
        assert_eq!(sequel_tokens("最终幻想七"), BTreeSet::from([7]));
        assert_eq!(sequel_tokens("Mega Man X4"), BTreeSet::from([4]));
        assert!(sequel_tokens("Chrono Trigger").is_empty());
        // Four-digit years are not sequel numbers
        assert!(sequel_tokens("NHL 2024").is_empty());
    }
}

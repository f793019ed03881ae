//! Title normalization.
//!
//! ROM filenames and catalog titles arrive with fullwidth punctuation,
//! ideographic spaces, and scene-release tags (translation group, region,
//! revision). Normalization folds all of those away so trivial formatting
//! differences do not depress similarity scores:
//!
//! ```text
//! 最终幻想７ （汉化） (USA)  →  最终幻想7
//! ```

/// Markers that identify a parenthesized/bracketed group as release metadata
/// rather than part of the title.
const RELEASE_MARKERS: &[&str] = &[
    "简体", "繁体", "中文", "汉化", "英化", "破解", "修正", "修复", "补丁",
    "整合", "合集", "典藏", "完全版", "年度版", "豪华版", "beta", "demo",
    "proto", "sample",
];

/// Region names that appear as tags in released ROM names.
const REGION_MARKERS: &[&str] = &[
    "usa", "japan", "europe", "world", "china", "korea", "taiwan", "asia",
    "hong kong", "australia", "brazil", "france", "germany", "spain", "italy",
    "netherlands", "sweden", "russia", "canada", "united kingdom", "pal",
    "ntsc",
];

/// Normalize a title for display and comparison purposes.
///
/// Folds fullwidth characters to ASCII, strips release-metadata tag groups,
/// collapses whitespace, and trims surrounding quotes. Case is preserved;
/// matching lowercases separately.
pub fn normalize_title(s: &str) -> String {
    let folded: String = s.chars().map(fold_width).collect();
    let stripped = strip_release_tags(&folded);
    let collapsed = collapse_whitespace(&stripped);
    collapsed
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '`')
        .trim()
        .to_string()
}

/// Fold fullwidth ASCII forms and common CJK punctuation to ASCII.
fn fold_width(c: char) -> char {
    match c {
        // Fullwidth ASCII block: ！ through ～
        '\u{FF01}'..='\u{FF5E}' => {
            char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
        }
        '\u{3000}' => ' ', // ideographic space
        '、' => ',',
        '【' => '[',
        '】' => ']',
        '—' => '-',
        _ => c,
    }
}

/// Remove `(...)` and `[...]` groups whose content is release metadata.
/// Groups that look like part of the title are kept.
fn strip_release_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        let close = match ch {
            '(' => ')',
            '[' => ']',
            _ => {
                out.push(ch);
                continue;
            }
        };

        let start = i + ch.len_utf8();
        let mut end = s.len();
        let mut depth = 1u32;
        for (j, c) in chars.by_ref() {
            if c == ch {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    end = j;
                    break;
                }
            }
        }

        let content = &s[start..end];
        if is_release_tag(content) {
            // Drop the group; surrounding whitespace collapses later.
            continue;
        }
        out.push(ch);
        out.push_str(content);
        if end < s.len() {
            out.push(close);
        }
    }

    out
}

/// Classify a tag group's content as release metadata.
fn is_release_tag(content: &str) -> bool {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return true;
    }
    let lower = trimmed.to_lowercase();

    if RELEASE_MARKERS.iter().any(|m| lower.contains(m)) {
        return true;
    }

    // Version markers: v1, v1.02, ver.2
    if is_version_marker(&lower) {
        return true;
    }

    // Revision and disc tags
    if lower.starts_with("rev ") || lower.starts_with("disc ") || lower == "rev" {
        return true;
    }

    // Region lists: "USA", "Japan, USA"
    if lower.split(',').all(|part| {
        let p = part.trim();
        !p.is_empty() && REGION_MARKERS.contains(&p)
    }) {
        return true;
    }

    false
}

fn is_version_marker(lower: &str) -> bool {
    for prefix in ["v", "ver.", "ver"] {
        if let Some(rest) = lower.strip_prefix(prefix) {
            if rest.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                return true;
            }
        }
    }
    false
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_space = true; // also trims leading whitespace
    for c in s.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullwidth_folding() {
        assert_eq!(normalize_title("最终幻想７"), "最终幻想7");
        assert_eq!(normalize_title("ＦＦ７"), "FF7");
        assert_eq!(normalize_title("你好！世界？"), "你好!世界?");
    }

    #[test]
    fn test_ideographic_space_collapses() {
        assert_eq!(normalize_title("最终　幻想"), "最终 幻想");
        assert_eq!(normalize_title("  a   b  "), "a b");
    }

    #[test]
    fn test_translation_group_tags_stripped() {
        assert_eq!(normalize_title("勇者斗恶龙3 (简体汉化)"), "勇者斗恶龙3");
        assert_eq!(normalize_title("口袋妖怪 [汉化补丁]"), "口袋妖怪");
    }

    #[test]
    fn test_region_tags_stripped() {
        assert_eq!(normalize_title("Final Fantasy VII (USA)"), "Final Fantasy VII");
        assert_eq!(normalize_title("Chrono Trigger (Japan, USA)"), "Chrono Trigger");
    }

    #[test]
    fn test_version_and_disc_tags_stripped() {
        assert_eq!(normalize_title("Some Game (v1.02)"), "Some Game");
        assert_eq!(normalize_title("Some Game (Rev A)"), "Some Game");
        assert_eq!(normalize_title("Some Game (Disc 1)"), "Some Game");
        assert_eq!(normalize_title("Some Game (beta)"), "Some Game");
    }

    #[test]
    fn test_title_parentheses_kept() {
        // Subtitle in parentheses is part of the title, not a release tag
        assert_eq!(
            normalize_title("Kirby's Dream Land (Deluxe Edition Story)"),
            "Kirby's Dream Land (Deluxe Edition Story)"
        );
    }

    #[test]
    fn test_fullwidth_parens_become_tags() {
        // Fullwidth parens fold to ASCII first, so the group is recognized
        assert_eq!(normalize_title("魂斗罗（汉化）"), "魂斗罗");
    }

    #[test]
    fn test_surrounding_quotes_trimmed() {
        assert_eq!(normalize_title("\"最终幻想7\""), "最终幻想7");
    }

    #[test]
    fn test_unclosed_group_dropped_when_tag() {
        assert_eq!(normalize_title("游戏 (汉化"), "游戏");
    }
}

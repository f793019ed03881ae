//! Input-list parsing.
//!
//! The ROM list arrives as newline-delimited filenames, either from a file
//! or piped from stdin. Lines pasted from `ls` output may carry several
//! names in columns; runs of two or more spaces split those apart.

use std::io::Read;
use std::path::Path;

use crate::error::ResolveError;

/// Read filenames from a file, or from stdin when `path` is "-".
pub fn read_file_list(path: &str) -> Result<Vec<String>, ResolveError> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(parse_file_list(&content))
}

/// Split newline-delimited content into filenames. Columns separated by two
/// or more spaces split into separate names; blank lines are skipped.
pub fn parse_file_list(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        out.extend(split_columns(line));
    }
    out
}

fn split_columns(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut spaces = 0usize;

    for c in line.chars() {
        if c == ' ' {
            spaces += 1;
            continue;
        }
        if spaces >= 2 && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        } else if spaces > 0 && !current.is_empty() {
            current.push(' ');
        }
        spaces = 0;
        current.push(c);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Derive the query stem from a filename: path and extension stripped.
pub fn stem_of(file_name: &str) -> String {
    let path = Path::new(file_name);
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(file_name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_lines() {
        let list = parse_file_list("a.nes\nb.nes\n\n  c.nes  \n");
        assert_eq!(list, vec!["a.nes", "b.nes", "c.nes"]);
    }

    #[test]
    fn test_ls_columns_split() {
        let list = parse_file_list("魂斗罗.nes    超级马里奥.nes\n");
        assert_eq!(list, vec!["魂斗罗.nes", "超级马里奥.nes"]);
    }

    #[test]
    fn test_single_spaces_kept() {
        let list = parse_file_list("Final Fantasy VII.bin\n");
        assert_eq!(list, vec!["Final Fantasy VII.bin"]);
    }

    #[test]
    fn test_stem_strips_extension_and_path() {
        assert_eq!(stem_of("最终幻想7.sfc"), "最终幻想7");
        assert_eq!(stem_of("roms/nes/魂斗罗.nes"), "魂斗罗");
        assert_eq!(stem_of("noext"), "noext");
        assert_eq!(stem_of(".hidden"), ".hidden");
    }
}

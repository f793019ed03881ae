use std::fs;
use std::io::Write;
use std::path::Path;

use crate::{Frontend, FrontendError, GameEntry};

/// ES-DE (EmulationStation Desktop Edition) frontend.
pub struct EsDeFrontend;

impl EsDeFrontend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EsDeFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for EsDeFrontend {
    fn name(&self) -> &'static str {
        "ES-DE"
    }

    fn write_metadata(&self, games: &[GameEntry], output: &Path) -> Result<(), FrontendError> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let xml = render_gamelist(games);
        let mut file = fs::File::create(output)?;
        file.write_all(xml.as_bytes())?;

        Ok(())
    }
}

/// Render a gamelist document. An empty list renders an empty-but-valid
/// `<gameList>`; identical input renders byte-identical output.
pub fn render_gamelist(games: &[GameEntry]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\"?>\n");
    xml.push_str("<gameList>\n");

    for game in games {
        xml.push_str("  <game>\n");
        write_tag(&mut xml, "path", &format!("./{}", game.rom_filename));
        write_tag(&mut xml, "name", &game.name);
        xml.push_str("  </game>\n");
    }

    xml.push_str("</gameList>\n");
    xml
}

fn write_tag(xml: &mut String, tag: &str, value: &str) {
    xml.push_str("    <");
    xml.push_str(tag);
    xml.push('>');
    xml.push_str(&escape_xml(value));
    xml.push_str("</");
    xml.push_str(tag);
    xml.push_str(">\n");
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_render_single_game() {
        let games = vec![GameEntry {
            rom_filename: "最终幻想7.sfc".into(),
            name: "Final Fantasy VII".into(),
        }];
        let xml = render_gamelist(&games);
        assert!(xml.starts_with("<?xml version=\"1.0\"?>\n<gameList>\n"));
        assert!(xml.contains("<path>./最终幻想7.sfc</path>"));
        assert!(xml.contains("<name>Final Fantasy VII</name>"));
        assert!(xml.ends_with("</gameList>\n"));
    }

    #[test]
    fn test_render_empty_list_is_valid() {
        let xml = render_gamelist(&[]);
        assert_eq!(xml, "<?xml version=\"1.0\"?>\n<gameList>\n</gameList>\n");
    }

    #[test]
    fn test_render_escapes_names() {
        let games = vec![GameEntry {
            rom_filename: "b&w.nes".into(),
            name: "Black & White".into(),
        }];
        let xml = render_gamelist(&games);
        assert!(xml.contains("<path>./b&amp;w.nes</path>"));
        assert!(xml.contains("<name>Black &amp; White</name>"));
    }

    #[test]
    fn test_render_idempotent() {
        let games = vec![
            GameEntry {
                rom_filename: "a.nes".into(),
                name: "A".into(),
            },
            GameEntry {
                rom_filename: "b.nes".into(),
                name: "B".into(),
            },
        ];
        assert_eq!(render_gamelist(&games), render_gamelist(&games));
    }
}

//! Terminal listing of palettes using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Print, ResetColor, SetBackgroundColor},
};
use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::keys::StyleKey;
use crate::palette::{ColorGroups, Palette};
use crate::style::Color;

/// Map a scheme color to the terminal's color
pub fn term_color(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
        Color::Rgb(r, g, b) => style::Color::Rgb { r, g, b },
    }
}

/// Writes palettes as plain text, optionally with color swatches
pub struct PaletteWriter<W: Write> {
    out: W,
    /// Draw a colored block before each color
    swatches: bool,
}

impl<W: Write> PaletteWriter<W> {
    /// Create a writer
    pub fn new(out: W, swatches: bool) -> Self {
        Self { out, swatches }
    }

    /// Write palette keys, one per line, sorted
    pub fn write_keys(&mut self, palette: &Palette) -> Result<()> {
        for key in palette.sorted() {
            queue!(self.out, Print(key.name()), Print('\n'))?;
        }
        self.flush()
    }

    /// Write each color followed by the keys that use it
    pub fn write_color_groups(&mut self, groups: &ColorGroups) -> Result<()> {
        let width = groups
            .entries()
            .map(|color| color.to_string().width())
            .max()
            .unwrap_or(0);

        for (color, keys) in groups.iter() {
            if self.swatches {
                queue!(
                    self.out,
                    SetBackgroundColor(term_color(color)),
                    Print("  "),
                    ResetColor,
                    Print(' ')
                )?;
            }
            let name = color.to_string();
            let padding = " ".repeat(width - name.width());
            queue!(
                self.out,
                Print(name),
                Print(padding),
                Print("  "),
                Print(join_keys(keys)),
                Print('\n')
            )?;
        }
        self.flush()
    }

    /// Write a list of names in columns padded to the widest name
    pub fn write_columns(&mut self, names: &[&str], columns: usize) -> Result<()> {
        let width = names.iter().map(|name| name.width()).max().unwrap_or(0);
        for row in names.chunks(columns.max(1)) {
            let mut line = String::new();
            for name in row {
                line.push_str(name);
                line.push_str(&" ".repeat(width - name.width() + 2));
            }
            queue!(self.out, Print(line.trim_end()), Print('\n'))?;
        }
        self.flush()
    }

    /// Flush output
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Get the underlying writer back
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn join_keys(keys: &[StyleKey]) -> String {
    keys.iter()
        .map(StyleKey::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorSelector;
    use crate::scheme::ColorScheme;
    use crate::style::TextAttributes;

    fn output(writer: PaletteWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_write_keys_sorted() {
        let palette: Palette = ["B", "A"].into_iter().map(StyleKey::new).collect();
        let mut writer = PaletteWriter::new(Vec::new(), false);
        writer.write_keys(&palette).unwrap();
        assert_eq!(output(writer), "A\nB\n");
    }

    #[test]
    fn test_write_color_groups_aligned() {
        let scheme = ColorScheme::new("t")
            .with_attributes(StyleKey::new("A"), TextAttributes::fg(Color::Red))
            .with_attributes(StyleKey::new("B"), TextAttributes::fg(Color::Rgb(0, 0, 1)))
            .with_attributes(StyleKey::new("C"), TextAttributes::fg(Color::Red));
        let keys = [StyleKey::new("A"), StyleKey::new("B"), StyleKey::new("C")];
        let groups = ColorGroups::collect(&keys, &scheme, ColorSelector::Foreground, |_| true);

        let mut writer = PaletteWriter::new(Vec::new(), false);
        writer.write_color_groups(&groups).unwrap();
        assert_eq!(output(writer), "#000001  B\nred      A, C\n");
    }

    #[test]
    fn test_swatches_emit_escape_codes() {
        let scheme = ColorScheme::new("t").with_attributes(StyleKey::new("A"), TextAttributes::fg(Color::Red));
        let keys = [StyleKey::new("A")];
        let groups = ColorGroups::collect(&keys, &scheme, ColorSelector::Foreground, |_| true);

        let mut writer = PaletteWriter::new(Vec::new(), true);
        writer.write_color_groups(&groups).unwrap();
        let text = output(writer);
        assert!(text.contains('\u{1b}'));
        assert!(text.ends_with("red  A\n"));
    }

    #[test]
    fn test_write_columns() {
        let mut writer = PaletteWriter::new(Vec::new(), false);
        writer.write_columns(&["c", "rust", "toml"], 2).unwrap();
        assert_eq!(output(writer), "c     rust\ntoml\n");
    }

    #[test]
    fn test_term_color_mapping() {
        assert_eq!(term_color(Color::BrightRed), style::Color::Red);
        assert_eq!(term_color(Color::Rgb(1, 2, 3)), style::Color::Rgb { r: 1, g: 2, b: 3 });
    }
}

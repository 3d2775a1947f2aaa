use super::domain::{Character, NameStructure, StrokeCounts};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_FALLBACK_STROKES: u32 = 10;

/// Upper bound accepted for a single character's stroke count.
pub const MAX_STROKES: u32 = 64;

/// Traditional (Kangxi-style) stroke counts for the curated character set.
const CURATED_STROKES: &[(char, u32)] = &[
    // Common surnames
    ('张', 11),
    ('王', 4),
    ('李', 7),
    ('赵', 14),
    ('刘', 15),
    ('陈', 16),
    ('杨', 13),
    ('黄', 12),
    ('周', 8),
    ('吴', 7),
    ('孙', 10),
    ('徐', 10),
    ('朱', 6),
    ('胡', 11),
    ('郭', 15),
    ('何', 7),
    ('高', 10),
    ('林', 8),
    ('罗', 20),
    ('郑', 19),
    ('梁', 11),
    ('谢', 17),
    ('宋', 7),
    ('唐', 10),
    ('许', 11),
    ('韩', 17),
    ('冯', 12),
    ('邓', 19),
    ('曹', 11),
    ('彭', 12),
    ('曾', 12),
    // Compound surname components
    ('欧', 15),
    ('阳', 17),
    ('太', 4),
    ('史', 5),
    ('端', 14),
    ('木', 4),
    ('上', 3),
    ('官', 8),
    ('司', 5),
    ('马', 10),
    ('诸', 16),
    ('葛', 15),
    ('东', 8),
    ('方', 4),
    ('皇', 9),
    ('甫', 7),
    ('公', 4),
    // Given-name characters
    ('雅', 12),
    ('琪', 13),
    ('智', 12),
    ('慧', 15),
    ('德', 15),
    ('华', 14),
    ('文', 4),
    ('武', 8),
    ('明', 8),
    ('亮', 9),
    ('建', 9),
    ('国', 8),
    ('强', 12),
    ('伟', 11),
    ('新', 13),
    ('春', 9),
    ('秋', 9),
    ('冬', 5),
    ('夏', 10),
    ('美', 9),
    ('丽', 7),
    ('芳', 10),
    ('香', 9),
    ('花', 8),
    ('月', 4),
    ('星', 9),
    ('云', 4),
    ('山', 3),
    ('水', 4),
    ('仁', 4),
    ('海', 10),
    ('轩', 10),
    ('浩', 10),
    ('涵', 11),
    ('一', 1),
    ('子', 3),
    ('玉', 5),
    ('安', 6),
    ('平', 5),
    ('嘉', 14),
    ('欣', 8),
    ('杰', 12),
    ('军', 9),
    ('婷', 12),
    ('敏', 11),
    ('静', 16),
    ('宇', 6),
    ('天', 4),
    ('龙', 16),
    ('凤', 14),
    ('心', 4),
    ('成', 7),
];

/// Result of resolving one character against the stroke table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeLookup {
    pub strokes: u32,
    pub estimated: bool,
}

/// Character to stroke-count dictionary with a deterministic fallback.
#[derive(Debug, Clone)]
pub struct StrokeTable {
    strokes: HashMap<char, u32>,
    fallback: u32,
}

impl StrokeTable {
    /// Curated table; unknown characters resolve to `fallback` (clamped to `1..=MAX_STROKES`).
    pub fn standard(fallback: u32) -> Self {
        Self {
            strokes: CURATED_STROKES.iter().copied().collect(),
            fallback: fallback.clamp(1, MAX_STROKES),
        }
    }

    pub fn fallback(&self) -> u32 {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn contains(&self, glyph: char) -> bool {
        self.strokes.contains_key(&glyph)
    }

    pub fn resolve(&self, glyph: char) -> StrokeLookup {
        match self.strokes.get(&glyph) {
            Some(&strokes) => StrokeLookup {
                strokes,
                estimated: false,
            },
            None => StrokeLookup {
                strokes: self.fallback,
                estimated: true,
            },
        }
    }

    /// Resolves every character of the name, keeping the surname/given-name split.
    pub fn counts(&self, structure: &NameStructure) -> StrokeCounts {
        let surname: Vec<Character> = structure
            .surname
            .chars()
            .map(|glyph| self.character(glyph))
            .collect();
        let given_name: Vec<Character> = structure
            .given_name
            .chars()
            .map(|glyph| self.character(glyph))
            .collect();
        let total = surname
            .iter()
            .chain(given_name.iter())
            .map(|character| character.strokes)
            .sum();

        StrokeCounts {
            surname,
            given_name,
            total,
        }
    }

    fn character(&self, glyph: char) -> Character {
        let lookup = self.resolve(glyph);
        Character {
            glyph,
            strokes: lookup.strokes,
            estimated: lookup.estimated,
        }
    }

    /// Adds or overrides entries from a `character,strokes` CSV file.
    pub fn extend_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, StrokeTableError> {
        let file = std::fs::File::open(path)?;
        self.extend_from_reader(file)
    }

    /// Adds or overrides entries from CSV data with a `character,strokes` header.
    pub fn extend_from_reader<R: Read>(&mut self, reader: R) -> Result<usize, StrokeTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut loaded = 0;

        for (index, row) in csv_reader.deserialize::<StrokeRow>().enumerate() {
            let row = row?;
            // header occupies line 1
            let line = index + 2;
            let mut glyphs = row.character.chars();
            let glyph = match (glyphs.next(), glyphs.next()) {
                (Some(glyph), None) => glyph,
                _ => {
                    return Err(StrokeTableError::InvalidEntry {
                        line,
                        reason: format!("expected a single character, found '{}'", row.character),
                    })
                }
            };
            if row.strokes == 0 || row.strokes > MAX_STROKES {
                return Err(StrokeTableError::InvalidEntry {
                    line,
                    reason: format!(
                        "stroke count {} for '{}' outside 1..={}",
                        row.strokes, glyph, MAX_STROKES
                    ),
                });
            }

            self.strokes.insert(glyph, row.strokes);
            loaded += 1;
        }

        Ok(loaded)
    }
}

impl Default for StrokeTable {
    fn default() -> Self {
        Self::standard(DEFAULT_FALLBACK_STROKES)
    }
}

#[derive(Debug, Deserialize)]
struct StrokeRow {
    #[serde(deserialize_with = "trimmed")]
    character: String,
    strokes: u32,
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim_start_matches('\u{feff}').trim().to_string())
}

#[derive(Debug)]
pub enum StrokeTableError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidEntry { line: usize, reason: String },
}

impl fmt::Display for StrokeTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeTableError::Io(err) => write!(f, "failed to read stroke table: {}", err),
            StrokeTableError::Csv(err) => write!(f, "invalid stroke table CSV: {}", err),
            StrokeTableError::InvalidEntry { line, reason } => {
                write!(f, "invalid stroke table entry on line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for StrokeTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StrokeTableError::Io(err) => Some(err),
            StrokeTableError::Csv(err) => Some(err),
            StrokeTableError::InvalidEntry { .. } => None,
        }
    }
}

impl From<std::io::Error> for StrokeTableError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for StrokeTableError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn curated_characters_resolve_exactly() {
        let table = StrokeTable::default();
        assert_eq!(
            table.resolve('张'),
            StrokeLookup {
                strokes: 11,
                estimated: false
            }
        );
        assert_eq!(table.resolve('明').strokes, 8);
        assert_eq!(table.resolve('欧').strokes, 15);
    }

    #[test]
    fn curated_table_has_no_duplicate_characters() {
        let table = StrokeTable::default();
        assert_eq!(table.len(), CURATED_STROKES.len());
    }

    #[test]
    fn unknown_characters_use_deterministic_fallback() {
        let table = StrokeTable::default();
        let first = table.resolve('燚');
        let second = table.resolve('燚');
        assert_eq!(first, second);
        assert_eq!(first.strokes, DEFAULT_FALLBACK_STROKES);
        assert!(first.estimated);
    }

    #[test]
    fn fallback_is_clamped_to_a_positive_stroke_count() {
        assert_eq!(StrokeTable::standard(0).fallback(), 1);
        assert_eq!(StrokeTable::standard(500).fallback(), MAX_STROKES);
    }

    #[test]
    fn csv_rows_extend_and_override_the_table() {
        let mut table = StrokeTable::default();
        let loaded = table
            .extend_from_reader(Cursor::new("character,strokes\n燚,16\n\u{5f20},12\n"))
            .expect("csv loads");

        assert_eq!(loaded, 2);
        assert_eq!(
            table.resolve('燚'),
            StrokeLookup {
                strokes: 16,
                estimated: false
            }
        );
        assert_eq!(table.resolve('张').strokes, 12);
    }

    #[test]
    fn csv_rejects_multi_character_entries() {
        let mut table = StrokeTable::default();
        let error = table
            .extend_from_reader(Cursor::new("character,strokes\n欧阳,32\n"))
            .expect_err("multi-character row rejected");

        match error {
            StrokeTableError::InvalidEntry { line, .. } => assert_eq!(line, 2),
            other => panic!("expected invalid entry, got {other:?}"),
        }
    }

    #[test]
    fn csv_rejects_zero_strokes() {
        let mut table = StrokeTable::default();
        let error = table
            .extend_from_reader(Cursor::new("character,strokes\n燚,0\n"))
            .expect_err("zero strokes rejected");
        assert!(matches!(error, StrokeTableError::InvalidEntry { .. }));
    }

    #[test]
    fn csv_surfaces_parse_errors() {
        let mut table = StrokeTable::default();
        let error = table
            .extend_from_reader(Cursor::new("character,strokes\n燚,many\n"))
            .expect_err("non-numeric strokes rejected");
        assert!(matches!(error, StrokeTableError::Csv(_)));
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let mut table = StrokeTable::default();
        let error = table
            .extend_from_path("./does-not-exist.csv")
            .expect_err("expected io error");
        assert!(matches!(error, StrokeTableError::Io(_)));
    }
}

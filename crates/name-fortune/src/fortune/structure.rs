use super::domain::NameStructure;
use super::FortuneError;

pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_NAME_CHARS: usize = 6;

/// Two-character surnames recognized ahead of the single-character default.
pub const COMPOUND_SURNAMES: &[&str] = &[
    "欧阳", "太史", "端木", "上官", "司马", "诸葛", "东方", "皇甫", "尉迟", "公孙", "慕容", "令狐",
    "长孙", "宇文", "司徒", "夏侯",
];

pub fn is_compound_surname(candidate: &str) -> bool {
    COMPOUND_SURNAMES.contains(&candidate)
}

/// Splits a full name into surname and given name.
pub fn parse(full_name: &str) -> Result<NameStructure, FortuneError> {
    let characters: Vec<char> = full_name.chars().collect();
    if characters.len() < MIN_NAME_CHARS {
        return Err(FortuneError::invalid_name(
            full_name,
            format!("name must have at least {MIN_NAME_CHARS} characters"),
        ));
    }

    let prefix: String = characters[..2].iter().collect();
    let surname_len = if is_compound_surname(&prefix) { 2 } else { 1 };

    let surname: String = characters[..surname_len].iter().collect();
    let given_name: String = characters[surname_len..].iter().collect();
    if given_name.is_empty() {
        return Err(FortuneError::invalid_name(
            full_name,
            format!("surname '{surname}' leaves no given name"),
        ));
    }

    Ok(NameStructure {
        full_name: full_name.to_string(),
        surname,
        given_name,
        characters,
    })
}

/// Trims the raw input and checks the 2-6 CJK character envelope accepted by requests.
pub fn normalize_full_name(raw: &str) -> Result<String, FortuneError> {
    let trimmed = raw.trim_start_matches('\u{feff}').trim();
    let count = trimmed.chars().count();

    if count < MIN_NAME_CHARS || count > MAX_NAME_CHARS {
        return Err(FortuneError::invalid_name(
            trimmed,
            format!("name must have {MIN_NAME_CHARS}-{MAX_NAME_CHARS} characters, found {count}"),
        ));
    }

    if let Some(offending) = trimmed.chars().find(|glyph| !is_cjk_ideograph(*glyph)) {
        return Err(FortuneError::invalid_name(
            trimmed,
            format!("'{offending}' is not a CJK ideograph"),
        ));
    }

    Ok(trimmed.to_string())
}

pub fn is_cjk_ideograph(glyph: char) -> bool {
    matches!(
        glyph as u32,
        0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0xF900..=0xFAFF | 0x20000..=0x2A6DF | 0x2A700..=0x2EBEF
    )
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Locale-aware name collation and weekday labels.
//!
//! The locale is a plain value carried in [`crate::config::Config`] and
//! passed to whoever needs to sort or label; there is no process-wide state.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const EN_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const PL_WEEKDAYS: [&str; 7] = ["pon", "wto", "śro", "czw", "pią", "sob", "nie"];

// Polish letters that sort directly after their base letter.
const PL_TAILORING: [(char, char, u8); 9] = [
    ('ą', 'a', 1),
    ('ć', 'c', 1),
    ('ę', 'e', 1),
    ('ł', 'l', 1),
    ('ń', 'n', 1),
    ('ó', 'o', 1),
    ('ś', 's', 1),
    ('ź', 'z', 1),
    ('ż', 'z', 2),
];

// Letters with a built-in stroke or bar. They have no canonical
// decomposition, so NFD alone leaves them sorting after `z`.
const STROKE_FOLDS: [(char, char); 8] = [
    ('ł', 'l'),
    ('ø', 'o'),
    ('đ', 'd'),
    ('ħ', 'h'),
    ('ŧ', 't'),
    ('ƀ', 'b'),
    ('ɨ', 'i'),
    ('ƶ', 'z'),
];

/// Supported display locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    En,
    #[default]
    Pl,
}

impl Locale {
    /// Collation order for display names.
    ///
    /// Letters compare case- and accent-insensitively first (stroked
    /// letters such as `ł` or `ø` fold to their base letter), then by
    /// accents, then by code point.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.primary_key(a)
            .cmp(&self.primary_key(b))
            .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
            .then_with(|| a.cmp(b))
    }

    /// Abbreviated weekday name, 0 = Monday.
    pub fn weekday_abbr(&self, weekday: usize) -> &'static str {
        let names = match self {
            Locale::En => &EN_WEEKDAYS,
            Locale::Pl => &PL_WEEKDAYS,
        };
        names[weekday % names.len()]
    }

    fn primary_key(&self, s: &str) -> Vec<(char, u8)> {
        let mut key = Vec::with_capacity(s.len());
        for c in s.nfc().flat_map(char::to_lowercase) {
            if let Some(tailored) = self.tailor(c) {
                key.push(tailored);
                continue;
            }
            if let Some(base) = fold_stroke(c) {
                key.push((base, 0));
                continue;
            }
            key.extend(
                std::iter::once(c)
                    .nfd()
                    .filter(|c| !is_combining_mark(*c))
                    .map(|c| (c, 0)),
            );
        }
        key
    }

    fn tailor(&self, c: char) -> Option<(char, u8)> {
        match self {
            Locale::En => None,
            Locale::Pl => PL_TAILORING
                .iter()
                .find(|(letter, _, _)| *letter == c)
                .map(|(_, base, rank)| (*base, *rank)),
        }
    }
}

fn fold_stroke(c: char) -> Option<char> {
    STROKE_FOLDS
        .iter()
        .find(|(letter, _)| *letter == c)
        .map(|(_, base)| *base)
}

// Accents and stroked letters only, in order of appearance.
fn secondary_key(s: &str) -> Vec<char> {
    s.nfd()
        .flat_map(char::to_lowercase)
        .filter(|c| is_combining_mark(*c) || fold_stroke(*c).is_some())
        .collect()
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Accepts `en`, `pl`, and POSIX-style names such as `pl_PL.UTF-8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" | "c" | "posix" => Ok(Locale::En),
            "pl" => Ok(Locale::Pl),
            _ => Err(LocaleError::Unsupported(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Pl => f.write_str("pl"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("Unsupported locale: {0}")]
    Unsupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(locale: Locale, names: &[&'static str]) -> Vec<&'static str> {
        let mut names = names.to_vec();
        names.sort_by(|a, b| locale.compare(a, b));
        names
    }

    #[test]
    fn test_polish_letters_follow_base_letter() {
        assert_eq!(
            sorted(Locale::Pl, &["Maciej", "Łukasz", "Lech", "Zenon", "Żaneta", "Źdźbło"]),
            vec!["Lech", "Łukasz", "Maciej", "Zenon", "Źdźbło", "Żaneta"]
        );
    }

    #[test]
    fn test_stroke_letters_sort_with_base_letter() {
        let names = ["Maciej", "Łukasz", "Lech", "Zenon", "Øyvind", "Peter"];
        let expected = vec!["Lech", "Łukasz", "Maciej", "Øyvind", "Peter", "Zenon"];
        assert_eq!(sorted(Locale::En, &names), expected);
        assert_eq!(sorted(Locale::Pl, &names), expected);
    }

    #[test]
    fn test_stroke_is_secondary_in_english() {
        assert_eq!(Locale::En.compare("Lukasz", "Łukasz"), Ordering::Less);
        assert_eq!(Locale::En.compare("Łukasz", "Lula"), Ordering::Less);
        assert_eq!(Locale::En.compare("Dragan", "Đorđe"), Ordering::Greater);
    }

    #[test]
    fn test_default_locale_is_polish() {
        assert_eq!(Locale::default(), Locale::Pl);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            sorted(Locale::En, &["bob", "Alice", "adam"]),
            vec!["adam", "Alice", "bob"]
        );
    }

    #[test]
    fn test_accents_are_secondary() {
        assert_eq!(
            sorted(Locale::En, &["Éric", "Emil", "Eric"]),
            vec!["Emil", "Eric", "Éric"]
        );
        assert_eq!(Locale::Pl.compare("Ścibor", "Sowa"), Ordering::Greater);
        assert_eq!(Locale::En.compare("Ścibor", "Sowa"), Ordering::Less);
    }

    #[test]
    fn test_equal_names() {
        assert_eq!(Locale::Pl.compare("Adam", "Adam"), Ordering::Equal);
    }

    #[test]
    fn test_weekday_abbr() {
        assert_eq!(Locale::En.weekday_abbr(0), "Mon");
        assert_eq!(Locale::En.weekday_abbr(6), "Sun");
        assert_eq!(Locale::Pl.weekday_abbr(0), "pon");
        assert_eq!(Locale::Pl.weekday_abbr(2), "śro");
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("pl_PL.UTF-8".parse::<Locale>().unwrap(), Locale::Pl);
        assert_eq!("pl".parse::<Locale>().unwrap(), Locale::Pl);
        assert_eq!("en_US".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("C".parse::<Locale>().unwrap(), Locale::En);
        assert!("de_DE".parse::<Locale>().is_err());
    }
}

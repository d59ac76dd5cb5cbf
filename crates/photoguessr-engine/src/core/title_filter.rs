use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

const PLAUSIBLE_YEARS: RangeInclusive<u32> = 1800..=2099;

/// Decides which fetched photos are fit to be played, based on their titles.
///
/// A title that states the year gives the answer away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleFilter {
    pub reject_leaked_year: bool,
    pub reject_cyrillic: bool,
}

impl Default for TitleFilter {
    fn default() -> Self {
        Self {
            reject_leaked_year: true,
            reject_cyrillic: false,
        }
    }
}

impl TitleFilter {
    #[must_use]
    pub fn accepts(&self, title: &str) -> bool {
        let leaks_year = self.reject_leaked_year && contains_leaked_year(title);
        let is_cyrillic = self.reject_cyrillic && contains_cyrillic(title);
        !leaks_year && !is_cyrillic
    }
}

/// Returns `true` if `text` contains a standalone four-digit number that reads as
/// a plausible year.
#[must_use]
pub fn contains_leaked_year(text: &str) -> bool {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| run.len() == 4)
        .filter_map(|run| run.parse::<u32>().ok())
        .any(|n| PLAUSIBLE_YEARS.contains(&n))
}

#[must_use]
pub fn contains_cyrillic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0400}'..='\u{052F}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_cyrillic_characters() {
        let cases = [
            ("Hello, world!", false),
            ("Привет, мир!", true),
            ("Hello, how are you?", false),
            ("Привет, как дела?", true),
            ("My name is John.", false),
            ("Меня зовут Джон.", true),
            ("What's the weather like today?", false),
            ("Какая сегодня погода?", true),
            ("I like to play soccer.", false),
            ("Мне нравится играть в футбол.", true),
            ("Where is the nearest supermarket?", false),
            ("Где ближайший супермаркет?", true),
        ];
        for (i, (text, expected)) in cases.into_iter().enumerate() {
            assert_eq!(contains_cyrillic(text), expected, "case {} ({text})", i + 1);
        }
    }

    #[test]
    fn test_contains_leaked_year() {
        let cases = [
            ("I went to the park.", false),
            ("I went to the park in 2020.", true),
            ("She bought a new car.", false),
            ("She bought a new car in 2018.", true),
            ("We enjoyed the concert last night.", false),
            ("We enjoyed the concert on December 12, 2019.", true),
            ("The construction of the building is in progress.", false),
            ("The construction of the building started in 2021.", true),
            ("He learned to play the guitar.", false),
            ("He learned to play the guitar in 2017.", true),
            ("They visited several countries during their trip.", false),
            ("They visited several countries during their trip in 2015.", true),
        ];
        for (i, (text, expected)) in cases.into_iter().enumerate() {
            assert_eq!(contains_leaked_year(text), expected, "case {} ({text})", i + 1);
        }
    }

    #[test]
    fn test_leaked_year_ignores_other_numbers() {
        assert!(!contains_leaked_year("Route 66 and house no. 12345"));
        assert!(!contains_leaked_year("Platform 9"));
        assert!(contains_leaked_year("Opening day (1937)"));
    }

    #[test]
    fn test_filter_flags() {
        let default = TitleFilter::default();
        assert!(default.accepts("Golden Gate Bridge construction"));
        assert!(!default.accepts("Golden Gate Bridge, 1935"));
        assert!(default.accepts("Мост"));

        let strict = TitleFilter {
            reject_leaked_year: true,
            reject_cyrillic: true,
        };
        assert!(!strict.accepts("Мост"));

        let lenient = TitleFilter {
            reject_leaked_year: false,
            reject_cyrillic: false,
        };
        assert!(lenient.accepts("Golden Gate Bridge, 1935"));
    }
}

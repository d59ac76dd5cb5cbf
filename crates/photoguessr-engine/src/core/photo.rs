use serde::{Deserialize, Serialize};

/// Identifier of a photograph in the photo search service.
///
/// `0` is a legitimate identifier, so "no photo" is always expressed as
/// `Option<PhotoId>` and never as a zero value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PhotoId(pub i64);

/// When a photograph was taken.
///
/// Some photographs are dated to a single year, others only to a span of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum YearSpec {
    Exact { year: i32 },
    Range { lower: i32, upper: i32 },
}

impl YearSpec {
    /// Builds a year spec from the pair of years reported by the search service.
    ///
    /// An absent upper bound, or one equal to `year`, denotes an exact year.
    /// Bounds given in descending order are normalized so that `lower <= upper`.
    #[must_use]
    pub fn from_bounds(year: i32, upper_bound: Option<i32>) -> Self {
        match upper_bound {
            Some(upper) if upper != year => Self::Range {
                lower: year.min(upper),
                upper: year.max(upper),
            },
            _ => Self::Exact { year },
        }
    }

    /// Returns `true` if `year` is the exact year or lies within the range.
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        match *self {
            Self::Exact { year: exact } => exact == year,
            Self::Range { lower, upper } => (lower..=upper).contains(&year),
        }
    }
}

/// A historical photograph presented in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    /// Path of the image relative to the image host.
    pub image_ref: String,
    pub title: String,
    pub capture_year: YearSpec,
}

impl Photo {
    #[must_use]
    pub fn new(
        id: i64,
        image_ref: impl Into<String>,
        title: impl Into<String>,
        capture_year: YearSpec,
    ) -> Self {
        Self {
            id: PhotoId(id),
            image_ref: image_ref.into(),
            title: title.into(),
            capture_year,
        }
    }

    /// Resolves the image reference against the image host base URL.
    #[must_use]
    pub fn image_url(&self, base_url: &str) -> String {
        resolve_image_url(base_url, &self.image_ref)
    }
}

/// Joins an image reference onto the image host base URL.
#[must_use]
pub fn resolve_image_url(base_url: &str, image_ref: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = image_ref.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_spec_from_bounds() {
        assert_eq!(YearSpec::from_bounds(1935, None), YearSpec::Exact { year: 1935 });
        assert_eq!(
            YearSpec::from_bounds(1935, Some(1935)),
            YearSpec::Exact { year: 1935 }
        );
        assert_eq!(
            YearSpec::from_bounds(1900, Some(1920)),
            YearSpec::Range {
                lower: 1900,
                upper: 1920
            }
        );
        assert_eq!(
            YearSpec::from_bounds(1920, Some(1900)),
            YearSpec::Range {
                lower: 1900,
                upper: 1920
            }
        );
    }

    #[test]
    fn test_year_spec_contains() {
        let range = YearSpec::Range {
            lower: 1900,
            upper: 1920,
        };
        assert!(range.contains(1900));
        assert!(range.contains(1920));
        assert!(!range.contains(1921));
        assert!(YearSpec::Exact { year: 1950 }.contains(1950));
        assert!(!YearSpec::Exact { year: 1950 }.contains(1951));
    }

    #[test]
    fn test_image_url_joins_without_double_slash() {
        let photo = Photo::new(
            449_470,
            "7/b/i/7bi9g0kfwouz0oho3b.jpeg",
            "Golden Gate Bridge construction",
            YearSpec::Exact { year: 1935 },
        );
        assert_eq!(
            photo.image_url("https://pastvu.com/_p/d/"),
            "https://pastvu.com/_p/d/7/b/i/7bi9g0kfwouz0oho3b.jpeg"
        );
        assert_eq!(
            photo.image_url("https://pastvu.com/_p/d"),
            "https://pastvu.com/_p/d/7/b/i/7bi9g0kfwouz0oho3b.jpeg"
        );
    }

    #[test]
    fn test_year_spec_serialization_is_tagged() {
        let json = serde_json::to_string(&YearSpec::Range {
            lower: 1900,
            upper: 1910,
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"range","lower":1900,"upper":1910}"#);
    }
}

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Match, Regex};
use serde_derive::{Deserialize, Serialize};

use crate::DbError;

/// Which verses of a chapter a lookup is restricted to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum VerseRange {
    /// Every verse in the chapter.
    #[default]
    Chapter,
    /// Exactly one verse.
    Single(i32),
    /// An inclusive span of verses. An inverted span matches nothing.
    Span(i32, i32),
}

impl VerseRange {
    /// Builds a range from optional start and end verse numbers.
    ///
    /// An end without a start is ignored, so it selects the whole chapter.
    pub fn from_bounds(start: Option<i32>, end: Option<i32>) -> Self {
        match (start, end) {
            (None, _) => VerseRange::Chapter,
            (Some(start), None) => VerseRange::Single(start),
            (Some(start), Some(end)) => VerseRange::Span(start, end),
        }
    }
}

/// Model representing a Bible reference used to look up a
/// passage in the database.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Reference {
    pub book: String,
    pub chapter: i32,
    pub range: VerseRange,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Reference {
            book,
            chapter,
            range,
        } = self;
        match range {
            VerseRange::Chapter => write!(f, "{} {}", book, chapter),
            VerseRange::Single(verse) => write!(f, "{} {}:{}", book, chapter, verse),
            VerseRange::Span(start, end) if start == end => {
                write!(f, "{} {}:{}", book, chapter, start)
            }
            VerseRange::Span(start, end) => write!(f, "{} {}:{}-{}", book, chapter, start, end),
        }
    }
}

impl FromStr for Reference {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Reference, Self::Err> {
        lazy_static! {
            static ref REF_RE: Regex =
                Regex::new(r"^(\w+(?: [a-zA-Z]+(?: [a-zA-Z]+)?)?)(?:\.| )((?:[0-9\-:\.])+)$")
                    .expect("reference pattern is valid");
            static ref CV_RE: Regex =
                Regex::new(r"^(\d{1,3})(?:[:\.](\d{1,3})?(?:-(\d{1,3}))?)?$")
                    .expect("chapter/verse pattern is valid");
        }

        let ref_caps = REF_RE.captures(s).ok_or_else(|| invalid_reference(s))?;
        let (book, cv) = match (ref_caps.get(1), ref_caps.get(2)) {
            (Some(book), Some(cv)) => (book.as_str().to_string(), cv),
            _ => return Err(invalid_reference(s)),
        };
        let cv_caps = CV_RE
            .captures(cv.as_str())
            .ok_or_else(|| invalid_reference(s))?;

        let range = match (cv_caps.get(2), cv_caps.get(3)) {
            // Chapter only
            (None, None) => VerseRange::Chapter,
            // Chapter and one verse
            (Some(verse), None) => VerseRange::Single(parse_num_match(verse)?),
            // Chapter with more than one verse
            (Some(start), Some(end)) => {
                VerseRange::Span(parse_num_match(start)?, parse_num_match(end)?)
            }
            (None, Some(_)) => return Err(invalid_reference(s)),
        };
        let chapter = cv_caps
            .get(1)
            .ok_or_else(|| invalid_reference(s))
            .and_then(parse_num_match)?;

        Ok(Reference {
            book,
            chapter,
            range,
        })
    }
}

/// Parse a [Match](regex::Match) into an i32.
fn parse_num_match(m: Match) -> Result<i32, DbError> {
    m.as_str().parse().map_err(|_| invalid_reference(m.as_str()))
}

/// Create an invalid reference error from the input.
fn invalid_reference(s: &str) -> DbError {
    DbError::invalid(format!("'{}' is not a valid Bible reference.", s))
}

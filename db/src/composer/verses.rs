use diesel::prelude::*;
use log::debug;

use crate::composer::testament_filter;
use crate::models::{Reference, Verse, VerseRange, VerseWithDetails};
use crate::schema::{books, translations, verses};
use crate::{DbConnection, DbError};

/// Number of search results returned when no limit is given.
pub const DEFAULT_SEARCH_LIMIT: u32 = 100;

/// Max number of search results returned from the database.
pub const MAX_SEARCH_LIMIT: u32 = 1000;

/// Shortest search query accepted, in characters.
pub const MIN_SEARCH_QUERY_LENGTH: usize = 3;

pub(super) fn in_chapter(
    translation: &str,
    book: &str,
    chapter: i32,
    range: VerseRange,
    conn: &mut DbConnection,
) -> Result<Vec<VerseWithDetails>, DbError> {
    let abbreviation = translation.to_uppercase();

    let mut query = verses::table
        .inner_join(translations::table)
        .inner_join(books::table)
        .filter(translations::abbreviation.eq(&abbreviation))
        .filter(books::name.eq(book))
        .filter(verses::chapter.eq(chapter))
        .select(VerseWithDetails::COLUMNS)
        .order_by(verses::verse.asc())
        .into_boxed();

    query = match range {
        VerseRange::Chapter => query,
        VerseRange::Single(verse) => query.filter(verses::verse.eq(verse)),
        VerseRange::Span(start, end) => query.filter(verses::verse.between(start, end)),
    };

    let found: Vec<VerseWithDetails> = query.load(conn)?;
    if found.is_empty() {
        let reference = Reference {
            book: book.to_string(),
            chapter,
            range,
        };
        return Err(DbError::NoVersesMatched {
            reference: format!("{} {}", abbreviation, reference),
        });
    }

    Ok(found)
}

pub(super) fn by_id(id: i32, conn: &mut DbConnection) -> Result<Verse, DbError> {
    verses::table
        .find(id)
        .select(Verse::COLUMNS)
        .first(conn)
        .optional()?
        .ok_or_else(|| DbError::not_found("Verse", id))
}

pub(super) fn search(
    text: &str,
    translation: Option<&str>,
    testament: Option<&str>,
    limit: Option<u32>,
    conn: &mut DbConnection,
) -> Result<Vec<VerseWithDetails>, DbError> {
    if text.chars().count() < MIN_SEARCH_QUERY_LENGTH {
        return Err(DbError::invalid(format!(
            "Search query must be at least {} characters long",
            MIN_SEARCH_QUERY_LENGTH
        )));
    }
    let testament = testament_filter(testament)?;
    let abbreviation = translation
        .filter(|t| !t.is_empty())
        .map(str::to_uppercase);
    let limit = clamp_limit(limit);

    debug!(
        "Searching for {:?} (translation: {:?}, testament: {:?}, limit: {})",
        text, abbreviation, testament, limit
    );

    let mut query = verses::table
        .inner_join(translations::table)
        .inner_join(books::table)
        .filter(verses::text.like(contains_pattern(text)).escape('\\'))
        .select(VerseWithDetails::COLUMNS)
        .order_by(verses::id.asc())
        .limit(limit)
        .into_boxed();

    if let Some(abbreviation) = abbreviation {
        query = query.filter(translations::abbreviation.eq(abbreviation));
    }
    if let Some(testament) = testament {
        query = query.filter(books::testament.eq(testament));
    }

    query.load(conn).map_err(DbError::from)
}

/// Applies the default search limit and caps it at the maximum.
fn clamp_limit(limit: Option<u32>) -> i64 {
    i64::from(limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT))
}

/// Builds a `LIKE` pattern matching `text` anywhere, with its wildcards
/// escaped by `\`.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

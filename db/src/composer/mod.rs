//! Query composers for the Bible database.
//!
//! Each resource (translations, books, verses) has a composer that turns
//! optional filters into a single parameterized query, runs it, and applies
//! not-found and validation policy to the result. The [Composer] trait
//! gathers them behind one seam so callers can swap in a fake.

use crate::models::*;
use crate::{DbConnection, DbError};

mod books;
mod translations;
mod verses;

pub use self::verses::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, MIN_SEARCH_QUERY_LENGTH};

/// Trait implemented by types that can query for and return Bible structures.
pub trait Composer: 'static {
    /// Gets all translations, ordered by name.
    fn translations(conn: &mut DbConnection) -> Result<Vec<Translation>, DbError>;

    /// Looks up a translation by id.
    fn translation_by_id(id: i32, conn: &mut DbConnection) -> Result<Translation, DbError>;

    /// Looks up a translation by abbreviation, ignoring case.
    fn translation_by_abbreviation(
        abbreviation: &str,
        conn: &mut DbConnection,
    ) -> Result<Translation, DbError>;

    /// Gets all books in canonical order, optionally restricted to one
    /// testament (`OT` or `NT`, any case).
    fn books(testament: Option<&str>, conn: &mut DbConnection) -> Result<Vec<Book>, DbError>;

    /// Looks up a book by id.
    fn book_by_id(id: i32, conn: &mut DbConnection) -> Result<Book, DbError>;

    /// Looks up a book by its exact, case-sensitive name.
    fn book_by_name(name: &str, conn: &mut DbConnection) -> Result<Book, DbError>;

    /// Looks up the verses of a chapter in a translation, ordered by verse
    /// number.
    ///
    /// Fails with [NoVersesMatched](DbError::NoVersesMatched) rather than
    /// returning an empty list.
    fn verses(
        translation: &str,
        book: &str,
        chapter: i32,
        range: VerseRange,
        conn: &mut DbConnection,
    ) -> Result<Vec<VerseWithDetails>, DbError>;

    /// Looks up a single verse by id.
    fn verse_by_id(id: i32, conn: &mut DbConnection) -> Result<Verse, DbError>;

    /// Searches verse text for a literal substring.
    ///
    /// The query must be at least three characters long. `limit` defaults to
    /// [DEFAULT_SEARCH_LIMIT] and is capped at [MAX_SEARCH_LIMIT]. No matches
    /// is an empty list, not an error.
    fn search(
        query: &str,
        translation: Option<&str>,
        testament: Option<&str>,
        limit: Option<u32>,
        conn: &mut DbConnection,
    ) -> Result<Vec<VerseWithDetails>, DbError>;

    /// Gets every verse of a chapter. Same as [verses](Composer::verses) with
    /// no range.
    fn chapter(
        translation: &str,
        book: &str,
        chapter: i32,
        conn: &mut DbConnection,
    ) -> Result<Vec<VerseWithDetails>, DbError> {
        Self::verses(translation, book, chapter, VerseRange::Chapter, conn)
    }
}

/// Main implementation of [Composer] over the SQLite schema.
pub struct SqliteComposer;

impl Composer for SqliteComposer {
    fn translations(conn: &mut DbConnection) -> Result<Vec<Translation>, DbError> {
        translations::all(conn)
    }

    fn translation_by_id(id: i32, conn: &mut DbConnection) -> Result<Translation, DbError> {
        translations::by_id(id, conn)
    }

    fn translation_by_abbreviation(
        abbreviation: &str,
        conn: &mut DbConnection,
    ) -> Result<Translation, DbError> {
        translations::by_abbreviation(abbreviation, conn)
    }

    fn books(testament: Option<&str>, conn: &mut DbConnection) -> Result<Vec<Book>, DbError> {
        books::all(testament, conn)
    }

    fn book_by_id(id: i32, conn: &mut DbConnection) -> Result<Book, DbError> {
        books::by_id(id, conn)
    }

    fn book_by_name(name: &str, conn: &mut DbConnection) -> Result<Book, DbError> {
        books::by_name(name, conn)
    }

    fn verses(
        translation: &str,
        book: &str,
        chapter: i32,
        range: VerseRange,
        conn: &mut DbConnection,
    ) -> Result<Vec<VerseWithDetails>, DbError> {
        verses::in_chapter(translation, book, chapter, range, conn)
    }

    fn verse_by_id(id: i32, conn: &mut DbConnection) -> Result<Verse, DbError> {
        verses::by_id(id, conn)
    }

    fn search(
        query: &str,
        translation: Option<&str>,
        testament: Option<&str>,
        limit: Option<u32>,
        conn: &mut DbConnection,
    ) -> Result<Vec<VerseWithDetails>, DbError> {
        verses::search(query, translation, testament, limit, conn)
    }
}

/// Parses an optional testament filter. An empty value means no filter.
fn testament_filter(testament: Option<&str>) -> Result<Option<Testament>, DbError> {
    testament
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .transpose()
}

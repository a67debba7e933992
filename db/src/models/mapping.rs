//! Row mapping for the Bible models.
//!
//! Every model pairs a `COLUMNS` selection with a `Queryable` impl that
//! builds the model from exactly those columns. If the two disagree on
//! arity or SQL type, the query does not compile.

use diesel::deserialize::{self, Queryable};
use diesel::sql_types::{Integer, Text};
use diesel::sqlite::Sqlite;

use crate::models::{Book, Testament, Translation, Verse, VerseWithDetails};
use crate::schema::{books, translations, verses};

type TranslationColumns = (
    translations::id,
    translations::name,
    translations::abbreviation,
    translations::language,
);

impl Translation {
    pub(crate) const COLUMNS: TranslationColumns = (
        translations::id,
        translations::name,
        translations::abbreviation,
        translations::language,
    );
}

impl Queryable<(Integer, Text, Text, Text), Sqlite> for Translation {
    type Row = (i32, String, String, String);

    fn build((id, name, abbreviation, language): Self::Row) -> deserialize::Result<Self> {
        Ok(Translation {
            id,
            name,
            abbreviation,
            language,
        })
    }
}

type BookColumns = (books::id, books::name, books::testament);

impl Book {
    pub(crate) const COLUMNS: BookColumns = (books::id, books::name, books::testament);
}

impl Queryable<(Integer, Text, Text), Sqlite> for Book {
    type Row = (i32, String, Testament);

    fn build((id, name, testament): Self::Row) -> deserialize::Result<Self> {
        Ok(Book {
            id,
            name,
            testament,
        })
    }
}

type VerseColumns = (
    verses::id,
    verses::translation_id,
    verses::book_id,
    verses::chapter,
    verses::verse,
    verses::text,
);

impl Verse {
    pub(crate) const COLUMNS: VerseColumns = (
        verses::id,
        verses::translation_id,
        verses::book_id,
        verses::chapter,
        verses::verse,
        verses::text,
    );
}

impl Queryable<(Integer, Integer, Integer, Integer, Integer, Text), Sqlite> for Verse {
    type Row = (i32, i32, i32, i32, i32, String);

    fn build(
        (id, translation_id, book_id, chapter, verse, text): Self::Row,
    ) -> deserialize::Result<Self> {
        Ok(Verse {
            id,
            translation_id,
            book_id,
            chapter,
            verse,
            text,
        })
    }
}

type VerseWithDetailsColumns = (
    verses::id,
    translations::name,
    translations::abbreviation,
    books::name,
    books::testament,
    verses::chapter,
    verses::verse,
    verses::text,
);

impl VerseWithDetails {
    /// Selection over `verses` joined with `translations` and `books`.
    pub(crate) const COLUMNS: VerseWithDetailsColumns = (
        verses::id,
        translations::name,
        translations::abbreviation,
        books::name,
        books::testament,
        verses::chapter,
        verses::verse,
        verses::text,
    );
}

impl Queryable<(Integer, Text, Text, Text, Text, Integer, Integer, Text), Sqlite>
    for VerseWithDetails
{
    type Row = (i32, String, String, String, Testament, i32, i32, String);

    fn build(row: Self::Row) -> deserialize::Result<Self> {
        let (
            id,
            translation_name,
            translation_abbreviation,
            book_name,
            testament,
            chapter,
            verse,
            text,
        ) = row;
        Ok(VerseWithDetails {
            id,
            translation_name,
            translation_abbreviation,
            book_name,
            testament,
            chapter,
            verse,
            text,
        })
    }
}

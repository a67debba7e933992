use std::fmt;
use std::str::FromStr;

use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;
use serde_derive::{Deserialize, Serialize};

use crate::DbError;

/// Model representing a Bible translation (e.g. the King James Version).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Translation {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
    pub language: String,
}

/// Enum for the testaments in the Bible (Old or New). This is mapped
/// to the `testament` column of the `books` table, stored as `OT` or `NT`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, AsExpression, FromSqlRow, Deserialize, Serialize,
)]
#[diesel(sql_type = Text)]
pub enum Testament {
    #[serde(rename = "OT")]
    Old,
    #[serde(rename = "NT")]
    New,
}

impl Testament {
    pub fn as_str(self) -> &'static str {
        match self {
            Testament::Old => "OT",
            Testament::New => "NT",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Testament {
    type Err = DbError;

    /// Parses a testament code, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_ref() {
            "OT" => Ok(Testament::Old),
            "NT" => Ok(Testament::New),
            _ => Err(DbError::invalid("Testament must be OT or NT")),
        }
    }
}

impl FromSql<Text, Sqlite> for Testament {
    fn from_sql(bytes: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let testament = <String as FromSql<Text, Sqlite>>::from_sql(bytes)?;
        match testament.as_ref() {
            "OT" => Ok(Testament::Old),
            "NT" => Ok(Testament::New),
            _ => Err(format!("Unexpected testament '{}' in the Bible", testament).into()),
        }
    }
}

impl ToSql<Text, Sqlite> for Testament {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
        out.set_value(self.as_str());
        Ok(IsNull::No)
    }
}

/// Model representing a book in the Bible.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub testament: Testament,
}

/// Model representing a Bible verse in a single translation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Verse {
    pub id: i32,
    pub translation_id: i32,
    pub book_id: i32,
    pub chapter: i32,
    pub verse: i32,
    pub text: String,
}

/// A verse joined with its translation and book, ready for display.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct VerseWithDetails {
    pub id: i32,
    pub translation_name: String,
    pub translation_abbreviation: String,
    pub book_name: String,
    pub testament: Testament,
    pub chapter: i32,
    pub verse: i32,
    pub text: String,
}

mod mapping;
mod reference;
pub use self::reference::{Reference, VerseRange};

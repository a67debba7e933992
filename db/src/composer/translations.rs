use diesel::prelude::*;

use crate::models::Translation;
use crate::schema::translations;
use crate::{DbConnection, DbError};

pub(super) fn all(conn: &mut DbConnection) -> Result<Vec<Translation>, DbError> {
    translations::table
        .select(Translation::COLUMNS)
        .order_by(translations::name.asc())
        .load(conn)
        .map_err(DbError::from)
}

pub(super) fn by_id(id: i32, conn: &mut DbConnection) -> Result<Translation, DbError> {
    translations::table
        .find(id)
        .select(Translation::COLUMNS)
        .first(conn)
        .optional()?
        .ok_or_else(|| DbError::not_found("Translation", id))
}

pub(super) fn by_abbreviation(
    abbreviation: &str,
    conn: &mut DbConnection,
) -> Result<Translation, DbError> {
    let abbreviation = abbreviation.to_uppercase();

    translations::table
        .filter(translations::abbreviation.eq(&abbreviation))
        .select(Translation::COLUMNS)
        .first(conn)
        .optional()?
        .ok_or_else(|| DbError::not_found("Translation", abbreviation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::Fixture;

    #[test]
    fn all_ordered_by_name() {
        let fixture = Fixture::new();
        let conn = &mut fixture.conn();

        let names: Vec<String> = all(conn).unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "American Standard Version",
                "King James Version",
                "World English Bible"
            ]
        );
    }

    #[test]
    fn by_id_found_and_missing() {
        let fixture = Fixture::new();
        let conn = &mut fixture.conn();

        let kjv = by_id(1, conn).unwrap();
        assert_eq!(
            kjv,
            Translation {
                id: 1,
                name: "King James Version".to_string(),
                abbreviation: "KJV".to_string(),
                language: "English".to_string(),
            }
        );

        assert_eq!(
            by_id(999, conn).unwrap_err(),
            DbError::not_found("Translation", 999)
        );
    }

    #[test]
    fn by_abbreviation_ignores_case() {
        let fixture = Fixture::new();
        let conn = &mut fixture.conn();

        let upper = by_abbreviation("KJV", conn).unwrap();
        let lower = by_abbreviation("kjv", conn).unwrap();
        let mixed = by_abbreviation("KjV", conn).unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
        assert_eq!(upper.id, 1);
    }

    #[test]
    fn by_abbreviation_missing() {
        let fixture = Fixture::new();
        let conn = &mut fixture.conn();

        assert!(matches!(
            by_abbreviation("niv", conn),
            Err(DbError::NotFound { entity: "Translation", ref key }) if key == "NIV"
        ));
    }
}

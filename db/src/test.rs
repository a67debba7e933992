use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use tempfile::TempDir;

use crate::{DbConnection, Store, StoreConfig};

const SCHEMA: &str = r#"
CREATE TABLE translations (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    abbreviation TEXT NOT NULL UNIQUE,
    language TEXT NOT NULL
);

CREATE TABLE books (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    testament TEXT NOT NULL CHECK (testament IN ('OT', 'NT'))
);

CREATE TABLE verses (
    id INTEGER PRIMARY KEY,
    translation_id INTEGER NOT NULL REFERENCES translations (id),
    book_id INTEGER NOT NULL REFERENCES books (id),
    chapter INTEGER NOT NULL,
    verse INTEGER NOT NULL,
    text TEXT NOT NULL
);
"#;

const SEED: &str = r#"
INSERT INTO translations (id, name, abbreviation, language) VALUES
    (1, 'King James Version', 'KJV', 'English'),
    (2, 'World English Bible', 'WEB', 'English'),
    (3, 'American Standard Version', 'ASV', 'English');

INSERT INTO books (id, name, testament) VALUES
    (1, 'Genesis', 'OT'),
    (19, 'Psalms', 'OT'),
    (43, 'John', 'NT'),
    (45, 'Romans', 'NT'),
    (62, '1 John', 'NT');

INSERT INTO verses (id, translation_id, book_id, chapter, verse, text) VALUES
    (1, 1, 1, 1, 1, 'In the beginning God created the heaven and the earth.'),
    (2, 1, 1, 1, 2, 'And the earth was without form, and void; and darkness was upon the face of the deep. And the Spirit of God moved upon the face of the waters.'),
    (3, 1, 1, 1, 3, 'And God said, Let there be light: and there was light.'),
    (4, 1, 19, 23, 1, 'The LORD is my shepherd; I shall not want.'),
    (5, 1, 43, 1, 1, 'In the beginning was the Word, and the Word was with God, and the Word was God.'),
    (6, 1, 43, 3, 18, 'He that believeth on him is not condemned: but he that believeth not is condemned already, because he hath not believed in the name of the only begotten Son of God.'),
    (7, 1, 43, 3, 16, 'For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life.'),
    (8, 1, 43, 3, 17, 'For God sent not his Son into the world to condemn the world; but that the world through him might be saved.'),
    (9, 1, 45, 8, 28, 'And we know that all things work together for good to them that love God, to them who are the called according to his purpose.'),
    (10, 1, 62, 4, 8, 'He that loveth not knoweth not God; for God is love.'),
    (11, 2, 43, 3, 16, 'For God so loved the world, that he gave his one and only Son, that whoever believes in him should not perish, but have eternal life.'),
    (12, 2, 1, 1, 1, 'In the beginning, God created the heavens and the earth.');
"#;

/// A seeded Bible database in a temporary directory.
///
/// The directory (and the database) is removed when the fixture is dropped.
pub struct Fixture {
    _dir: TempDir,
    pub store: Store,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_sql("")
    }

    /// Seeds the database with `count` extra World English Bible verses in
    /// Psalms 119, each containing the word "filler".
    pub fn with_filler_verses(count: u32) -> Self {
        Self::with_sql(&format!(
            "WITH RECURSIVE seq(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM seq WHERE n < {count})
             INSERT INTO verses (translation_id, book_id, chapter, verse, text)
             SELECT 2, 19, 119, n, 'Blessed is the filler verse number ' || n FROM seq;"
        ))
    }

    fn with_sql(extra: &str) -> Self {
        let dir = tempfile::tempdir().expect("Could not create a temporary directory");
        let path = dir.path().join("bibles.db");

        let mut conn = DbConnection::establish(&path.to_string_lossy())
            .expect("Could not create the fixture database");
        conn.batch_execute(SCHEMA).expect("Could not create the schema");
        conn.batch_execute(SEED).expect("Could not seed the database");
        conn.batch_execute(extra)
            .expect("Could not run the extra fixture SQL");

        Self {
            _dir: dir,
            store: Store::new(StoreConfig::new(path)),
        }
    }

    /// Opens a query-only connection through the store.
    pub fn conn(&self) -> DbConnection {
        self.store.open().expect("Could not open the fixture database")
    }
}

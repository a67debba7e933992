use diesel::prelude::*;

use crate::composer::testament_filter;
use crate::models::Book;
use crate::schema::books;
use crate::{DbConnection, DbError};

pub(super) fn all(testament: Option<&str>, conn: &mut DbConnection) -> Result<Vec<Book>, DbError> {
    let testament = testament_filter(testament)?;

    let mut query = books::table
        .select(Book::COLUMNS)
        .order_by(books::id.asc())
        .into_boxed();

    if let Some(testament) = testament {
        query = query.filter(books::testament.eq(testament));
    }

    query.load(conn).map_err(DbError::from)
}

pub(super) fn by_id(id: i32, conn: &mut DbConnection) -> Result<Book, DbError> {
    books::table
        .find(id)
        .select(Book::COLUMNS)
        .first(conn)
        .optional()?
        .ok_or_else(|| DbError::not_found("Book", id))
}

pub(super) fn by_name(name: &str, conn: &mut DbConnection) -> Result<Book, DbError> {
    books::table
        .filter(books::name.eq(name))
        .select(Book::COLUMNS)
        .first(conn)
        .optional()?
        .ok_or_else(|| DbError::not_found("Book", name))
}

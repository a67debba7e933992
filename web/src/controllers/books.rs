use actix_web::web;

use db::models::Book;
use db::Composer;

use crate::controllers::{query, BooksParams, JsonResult};
use crate::ServerData;

/// Handles HTTP requests for the list of books, optionally for one testament
/// (e.g. /books?testament=NT).
pub async fn all<C>(
    data: web::Data<ServerData>,
    params: web::Query<BooksParams>,
) -> JsonResult<Vec<Book>>
where
    C: Composer,
{
    let BooksParams { testament } = params.into_inner();
    query(&data, move |conn| C::books(testament.as_deref(), conn))
        .await
        .map(web::Json)
}

/// Handles HTTP requests for a book by id (e.g. /books/43).
pub async fn by_id<C>(data: web::Data<ServerData>, id: web::Path<i32>) -> JsonResult<Book>
where
    C: Composer,
{
    let id = id.into_inner();
    query(&data, move |conn| C::book_by_id(id, conn))
        .await
        .map(web::Json)
}

/// Handles HTTP requests for a book by its exact name (e.g. /books/name/John).
pub async fn by_name<C>(data: web::Data<ServerData>, name: web::Path<String>) -> JsonResult<Book>
where
    C: Composer,
{
    let name = name.into_inner();
    query(&data, move |conn| C::book_by_name(&name, conn))
        .await
        .map(web::Json)
}

use actix_web::web;

use db::models::{Verse, VerseRange, VerseWithDetails};
use db::{Composer, MIN_SEARCH_QUERY_LENGTH};

use crate::controllers::{query, ChapterParams, JsonResult, SearchParams, VersesParams};
use crate::error::{Error, JsonError};
use crate::ServerData;

/// Handles HTTP requests for verses in a chapter
/// (e.g. /verses?translation=KJV&book=John&chapter=3&verse_start=16).
///
/// Responds with 404 when nothing matches.
pub async fn all<C>(
    data: web::Data<ServerData>,
    params: web::Query<VersesParams>,
) -> JsonResult<Vec<VerseWithDetails>>
where
    C: Composer,
{
    let VersesParams {
        translation,
        book,
        chapter,
        verse_start,
        verse_end,
    } = params.into_inner();
    let range = VerseRange::from_bounds(verse_start, verse_end);

    query(&data, move |conn| {
        C::verses(&translation, &book, chapter, range, conn)
    })
    .await
    .map(web::Json)
}

/// Handles HTTP requests for a single verse by id (e.g. /verses/555).
pub async fn by_id<C>(data: web::Data<ServerData>, id: web::Path<i32>) -> JsonResult<Verse>
where
    C: Composer,
{
    let id = id.into_inner();
    query(&data, move |conn| C::verse_by_id(id, conn))
        .await
        .map(web::Json)
}

/// Handles HTTP requests for a text search
/// (e.g. /verses/search/text?query=light&testament=OT&limit=10).
///
/// Short queries are rejected before the database is touched.
pub async fn search<C>(
    data: web::Data<ServerData>,
    params: web::Query<SearchParams>,
) -> JsonResult<Vec<VerseWithDetails>>
where
    C: Composer,
{
    let SearchParams {
        query: text,
        translation,
        testament,
        limit,
    } = params.into_inner();

    if text.chars().count() < MIN_SEARCH_QUERY_LENGTH {
        return Err(JsonError(Error::invalid(format!(
            "Search query must be at least {} characters long",
            MIN_SEARCH_QUERY_LENGTH
        ))));
    }

    query(&data, move |conn| {
        C::search(
            &text,
            translation.as_deref(),
            testament.as_deref(),
            limit,
            conn,
        )
    })
    .await
    .map(web::Json)
}

/// Handles HTTP requests for a whole chapter
/// (e.g. /verses/chapter/all?translation=KJV&book=John&chapter=3).
pub async fn chapter<C>(
    data: web::Data<ServerData>,
    params: web::Query<ChapterParams>,
) -> JsonResult<Vec<VerseWithDetails>>
where
    C: Composer,
{
    let ChapterParams {
        translation,
        book,
        chapter,
    } = params.into_inner();

    query(&data, move |conn| C::chapter(&translation, &book, chapter, conn))
        .await
        .map(web::Json)
}

use actix_web::http::header;
use actix_web::{web, FromRequest, Handler, HttpRequest, HttpResponse, Resource, Responder};
use serde_derive::Deserialize;

use db::{Composer, DbConnection, DbError};

use crate::error::{Error, JsonError};
use crate::responder::{ErrorData, HealthData, IndexData};
use crate::ServerData;

pub mod books;
pub mod translations;
pub mod verses;

/// Result for JSON response handlers
pub type JsonResult<T> = Result<web::Json<T>, JsonError>;

/// Query parameters for the books endpoint.
#[derive(Deserialize)]
pub struct BooksParams {
    pub testament: Option<String>,
}

/// Query parameters for looking up verses in a chapter.
#[derive(Deserialize)]
pub struct VersesParams {
    pub translation: String,
    pub book: String,
    pub chapter: i32,
    pub verse_start: Option<i32>,
    pub verse_end: Option<i32>,
}

/// Query parameters for a whole chapter.
#[derive(Deserialize)]
pub struct ChapterParams {
    pub translation: String,
    pub book: String,
    pub chapter: i32,
}

/// Query parameters for the search endpoint.
#[derive(Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub translation: Option<String>,
    pub testament: Option<String>,
    pub limit: Option<u32>,
}

/// Runs `f` against the database on the blocking thread pool.
///
/// One connection is opened for the call and closed before it returns.
async fn query<T, F>(data: &ServerData, f: F) -> Result<T, JsonError>
where
    F: FnOnce(&mut DbConnection) -> Result<T, DbError> + Send + 'static,
    T: Send + 'static,
{
    let store = data.store.clone();
    Ok(web::block(move || store.with_connection(f)).await??)
}

/// Handles HTTP requests for the API index.
pub async fn index() -> web::Json<IndexData> {
    web::Json(IndexData::new())
}

/// Handles HTTP requests for the health check.
pub async fn health() -> web::Json<HealthData> {
    web::Json(HealthData::healthy())
}

/// Handles requests that match no route.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    let e = Error::NotFound {
        message: format!("No resource at '{}'.", req.path()),
    };
    HttpResponse::NotFound().json(ErrorData::from_error(&e))
}

/// Turns a rejected path or query string into a JSON bad request.
fn bad_request<E: std::fmt::Display>(e: E, _: &HttpRequest) -> actix_web::Error {
    JsonError(Error::invalid(e.to_string())).into()
}

/// Handles requests with a method other than `GET` on a known path.
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "GET"))
        .json(ErrorData {
            error: "method_not_allowed".to_string(),
            detail: format!("{} is not supported on '{}'.", req.method(), req.path()),
        })
}

/// A read-only resource at `path`, served by `handler`.
fn get_resource<F, Args>(path: &str, handler: F) -> Resource
where
    F: Handler<Args>,
    Args: FromRequest + 'static,
    F::Output: Responder + 'static,
{
    web::resource(path)
        .route(web::get().to(handler))
        .default_service(web::route().to(method_not_allowed))
}

/// Registers every API route, looking data up through `C`.
pub fn configure<C: Composer>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(bad_request))
        .app_data(web::QueryConfig::default().error_handler(bad_request))
        .service(get_resource("/", index))
        .service(get_resource("/health", health))
        .service(
            web::scope("/translations")
                .service(get_resource("", translations::all::<C>))
                .service(get_resource(
                    "/abbreviation/{abbreviation}",
                    translations::by_abbreviation::<C>,
                ))
                .service(get_resource("/{id}", translations::by_id::<C>)),
        )
        .service(
            web::scope("/books")
                .service(get_resource("", books::all::<C>))
                .service(get_resource("/name/{name}", books::by_name::<C>))
                .service(get_resource("/{id}", books::by_id::<C>)),
        )
        .service(
            web::scope("/verses")
                .service(get_resource("", verses::all::<C>))
                .service(get_resource("/search/text", verses::search::<C>))
                .service(get_resource("/chapter/all", verses::chapter::<C>))
                .service(get_resource("/{id}", verses::by_id::<C>)),
        );
}

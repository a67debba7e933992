use actix_web::web;

use db::models::Translation;
use db::Composer;

use crate::controllers::{query, JsonResult};
use crate::ServerData;

/// Handles HTTP requests for the list of translations.
pub async fn all<C>(data: web::Data<ServerData>) -> JsonResult<Vec<Translation>>
where
    C: Composer,
{
    query(&data, C::translations).await.map(web::Json)
}

/// Handles HTTP requests for a translation by id (e.g. /translations/1).
pub async fn by_id<C>(data: web::Data<ServerData>, id: web::Path<i32>) -> JsonResult<Translation>
where
    C: Composer,
{
    let id = id.into_inner();
    query(&data, move |conn| C::translation_by_id(id, conn))
        .await
        .map(web::Json)
}

/// Handles HTTP requests for a translation by abbreviation
/// (e.g. /translations/abbreviation/kjv).
pub async fn by_abbreviation<C>(
    data: web::Data<ServerData>,
    abbreviation: web::Path<String>,
) -> JsonResult<Translation>
where
    C: Composer,
{
    let abbreviation = abbreviation.into_inner();
    query(&data, move |conn| {
        C::translation_by_abbreviation(&abbreviation, conn)
    })
    .await
    .map(web::Json)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use db::models::Translation;

    use crate::test::*;

    #[actix_rt::test]
    async fn all() {
        for uri in &["/translations", "/translations/"] {
            let (status, body) = get(uri).await;

            assert_eq!(status, StatusCode::OK);
            let translations: Vec<Translation> = serde_json::from_value(body).unwrap();
            assert_eq!(translations.len(), 2);
            assert_eq!(translations[0].abbreviation, "KJV");
        }
    }

    #[actix_rt::test]
    async fn by_id() {
        let (status, body) = get("/translations/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["abbreviation"], "WEB");

        let (status, body) = get("/translations/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["detail"], "Translation '99' was not found.");
    }

    #[actix_rt::test]
    async fn by_abbreviation() {
        let (status, lower) = get("/translations/abbreviation/kjv").await;
        assert_eq!(status, StatusCode::OK);

        let (_, upper) = get("/translations/abbreviation/KJV").await;
        assert_eq!(lower, upper);
        assert_eq!(lower["name"], "King James Version");

        let (status, body) = get("/translations/abbreviation/niv").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Translation 'NIV' was not found.");
    }
}

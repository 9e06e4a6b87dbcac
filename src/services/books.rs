//! Book listing shown after a successful creation.

use crate::client::BookstoreApi;
use crate::dto::books::{BookListPageData, BookListQuery};
use crate::services::ServiceResult;

/// Loads the books matching the optional name filter.
pub async fn load_book_list<A>(api: &A, query: BookListQuery) -> ServiceResult<BookListPageData>
where
    A: BookstoreApi + ?Sized,
{
    let search_query = query
        .q
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty());

    let books = api.list_books(search_query.clone()).await.map_err(|err| {
        log::error!("Failed to list books: {err}");
        err
    })?;

    Ok(BookListPageData {
        books,
        search_query,
    })
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::client::ApiError;
    use crate::client::mock::MockBookstoreApi;
    use crate::domain::book::BookSummary;
    use crate::domain::types::BookId;
    use crate::services::ServiceError;

    #[actix_web::test]
    async fn blank_filter_is_not_sent() {
        let mut api = MockBookstoreApi::new();
        api.expect_list_books()
            .with(eq(None::<String>))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let data = load_book_list(
            &api,
            BookListQuery {
                q: Some("   ".into()),
            },
        )
        .await
        .unwrap();

        assert!(data.books.is_empty());
        assert_eq!(data.search_query, None);
    }

    #[actix_web::test]
    async fn filter_is_trimmed_and_echoed() {
        let mut api = MockBookstoreApi::new();
        api.expect_list_books()
            .with(eq(Some("dune".to_string())))
            .returning(|_| {
                Ok(vec![BookSummary {
                    id: BookId::new(4).unwrap(),
                    name: "Dune".into(),
                    price: 12.5,
                    stock_total: 7,
                }])
            });

        let data = load_book_list(
            &api,
            BookListQuery {
                q: Some(" dune ".into()),
            },
        )
        .await
        .unwrap();

        assert_eq!(data.books.len(), 1);
        assert_eq!(data.search_query.as_deref(), Some("dune"));
    }

    #[actix_web::test]
    async fn api_errors_are_propagated() {
        let mut api = MockBookstoreApi::new();
        api.expect_list_books()
            .returning(|_| Err(ApiError::Fetch { status: 500 }));

        let result = load_book_list(&api, BookListQuery::default()).await;

        assert!(matches!(
            result,
            Err(ServiceError::Api(ApiError::Fetch { status: 500 }))
        ));
    }
}

//! Book endpoints
//!
//! Demonstrates a conditionally embedded resource with status-code
//! semantics: 200 when the response is complete, 206 when the author was
//! requested but is unknown to the catalog, 404 when the book is missing.

use halyard::prelude::*;

use crate::models::{Author, Book};
use crate::state::AppState;

/// Query parameters for book retrieval
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookQuery {
    /// Embed the author when available
    #[serde(default)]
    pub with_author: bool,
}

/// `GET /books/{bookId}?withAuthor=true`
#[instrument(skip(state))]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<u32>,
    Query(query): Query<BookQuery>,
) -> Result<Response> {
    let book = state
        .books
        .find_by_id(book_id)
        .await
        .ok_or_else(|| Error::NotFound(format!("book {book_id}")))?;

    let id = book_id.to_string();
    let self_link = state.link_for("book", &[("bookId", &id)])?;

    if !query.with_author {
        let response: ResourceResponse<Book, Author> =
            ResourceResponse::wrap(book).with_self_link(self_link);
        return Ok(response.into_response());
    }

    match state.books.find_author_by_name(&book.author).await {
        Some(author) => {
            let response = ResourceResponse::wrap(book)
                .with_self_link(self_link)
                .with_embedded("author", EmbeddedResource::wrap(author));
            Ok(response.into_response())
        }
        None => {
            // author requested but not resolvable: partial content
            let response: ResourceResponse<Book, Author> =
                ResourceResponse::wrap(book).with_self_link(self_link);
            Ok((StatusCode::PARTIAL_CONTENT, Json(response)).into_response())
        }
    }
}

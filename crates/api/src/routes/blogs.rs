//! Route definitions for the `/blogs` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::blogs;
use crate::state::AppState;

/// Routes mounted at `/blogs`.
///
/// ```text
/// GET    /                 -> list_blogs
/// POST   /                 -> create_blog
/// GET    /{id}             -> get_blog
/// PUT    /{id}             -> update_blog (author)
/// DELETE /{id}             -> delete_blog (author)
/// POST   /{id}/like        -> toggle_like
/// GET    /{id}/comments    -> list_comments
/// POST   /{id}/comments    -> add_comment
/// DELETE /comments/{id}    -> delete_comment (commenter or post author)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blogs::list_blogs).post(blogs::create_blog))
        .route(
            "/{id}",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
        .route("/{id}/like", post(blogs::toggle_like))
        .route(
            "/{id}/comments",
            get(blogs::list_comments).post(blogs::add_comment),
        )
        .route("/comments/{id}", delete(blogs::delete_comment))
}

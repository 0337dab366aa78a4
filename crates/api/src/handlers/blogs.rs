//! Handlers for blog posts, likes, and comments.
//!
//! Private posts are visible to their author only; for everyone else they
//! behave as if they did not exist.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stageconnect_core::blog::{self, Visibility};
use stageconnect_core::profile::normalize_list;
use stageconnect_core::search::{
    clamp_limit, clamp_offset, normalize_filter, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
use stageconnect_core::types::DbId;
use stageconnect_db::models::blog::{
    Blog, BlogComment, BlogListParams, BlogWithCounts, CreateBlog, CreateBlogComment, LikeState,
    UpdateBlog,
};
use stageconnect_db::repositories::BlogRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, Deleted};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// GET /api/v1/blogs
pub async fn list_blogs(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<BlogListParams>,
) -> AppResult<Json<DataResponse<Vec<BlogWithCounts>>>> {
    let tag = normalize_filter(params.tag.as_deref());
    let blogs = BlogRepo::list_public(
        &state.pool,
        auth.user_id,
        params.author_id,
        tag.as_deref(),
        clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
        clamp_offset(params.offset),
    )
    .await?;
    Ok(Json(DataResponse::new(blogs)))
}

/// POST /api/v1/blogs
pub async fn create_blog(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateBlog>,
) -> AppResult<impl IntoResponse> {
    blog::validate_title(&input.title)?;
    blog::validate_content(&input.content)?;
    if let Some(visibility) = input.visibility.as_deref() {
        visibility.parse::<Visibility>()?;
    }
    let tags = normalize_tags(&input.tags)?;
    let excerpt = explicit_excerpt(input.excerpt.as_deref())
        .unwrap_or_else(|| blog::derive_excerpt(&input.content));

    let created = BlogRepo::create(&state.pool, auth.user_id, &input, &excerpt, &tags).await?;

    tracing::info!(blog_id = created.id, user_id = auth.user_id, "Blog published");

    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

/// GET /api/v1/blogs/{id}
pub async fn get_blog(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BlogWithCounts>>> {
    let post = find_visible(&state, id, auth.user_id).await?;
    Ok(Json(DataResponse::new(post)))
}

/// PUT /api/v1/blogs/{id}
pub async fn update_blog(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlog>,
) -> AppResult<Json<DataResponse<Blog>>> {
    if let Some(title) = input.title.as_deref() {
        blog::validate_title(title)?;
    }
    if let Some(content) = input.content.as_deref() {
        blog::validate_content(content)?;
    }
    if let Some(visibility) = input.visibility.as_deref() {
        visibility.parse::<Visibility>()?;
    }
    let tags = input.tags.as_deref().map(normalize_tags).transpose()?;
    // New content without an explicit excerpt re-derives it.
    let excerpt = explicit_excerpt(input.excerpt.as_deref())
        .or_else(|| input.content.as_deref().map(blog::derive_excerpt));

    let updated = BlogRepo::update(
        &state.pool,
        id,
        auth.user_id,
        &input,
        excerpt.as_deref(),
        tags.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::not_found("Blog", id))?;

    tracing::info!(blog_id = id, user_id = auth.user_id, "Blog updated");

    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/v1/blogs/{id}
pub async fn delete_blog(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    if !BlogRepo::delete(&state.pool, id, auth.user_id).await? {
        return Err(AppError::not_found("Blog", id));
    }

    tracing::info!(blog_id = id, user_id = auth.user_id, "Blog deleted");

    Ok(Json(DataResponse::with_message(Deleted { id }, "Blog deleted")))
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

/// POST /api/v1/blogs/{id}/like
pub async fn toggle_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<LikeState>>> {
    find_visible(&state, id, auth.user_id).await?;
    let like = BlogRepo::toggle_like(&state.pool, id, auth.user_id).await?;

    tracing::debug!(blog_id = id, user_id = auth.user_id, liked = like.liked, "Like toggled");

    Ok(Json(DataResponse::new(like)))
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// GET /api/v1/blogs/{id}/comments
pub async fn list_comments(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<BlogComment>>>> {
    find_visible(&state, id, auth.user_id).await?;
    let comments = BlogRepo::list_comments(&state.pool, id).await?;
    Ok(Json(DataResponse::new(comments)))
}

/// POST /api/v1/blogs/{id}/comments
pub async fn add_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateBlogComment>,
) -> AppResult<impl IntoResponse> {
    blog::validate_comment(&input.content)?;
    find_visible(&state, id, auth.user_id).await?;

    let comment = BlogRepo::add_comment(&state.pool, id, auth.user_id, &input.content).await?;

    tracing::info!(
        comment_id = comment.id,
        blog_id = id,
        user_id = auth.user_id,
        "Comment added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(comment))))
}

/// DELETE /api/v1/blogs/comments/{id}
///
/// Allowed for the commenter and for the author of the post.
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    if !BlogRepo::delete_comment(&state.pool, id, auth.user_id).await? {
        return Err(AppError::not_found("BlogComment", id));
    }

    tracing::info!(comment_id = id, user_id = auth.user_id, "Comment deleted");

    Ok(Json(DataResponse::with_message(Deleted { id }, "Comment deleted")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_visible(state: &AppState, id: DbId, viewer_id: DbId) -> AppResult<BlogWithCounts> {
    BlogRepo::find_with_counts(&state.pool, id, viewer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Blog", id))
}

fn explicit_excerpt(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|e| !e.is_empty()).map(str::to_string)
}

/// Trim, drop blanks and case-insensitive duplicates, then enforce the tag
/// limit.
fn normalize_tags(tags: &[String]) -> AppResult<Vec<String>> {
    let mut tags = normalize_list(tags);
    tags.retain(|t| !t.is_empty());
    blog::validate_tags(&tags)?;
    Ok(tags)
}

//! Blog post, comment, and like models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stageconnect_core::types::{DbId, Timestamp};

/// A row from the `blogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Blog {
    pub id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image_url: Option<String>,
    pub tags: Vec<String>,
    pub visibility: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A blog post with author name and engagement counts for the viewer.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogWithCounts {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub blog: Blog,
    pub author_name: String,
    pub like_count: i64,
    pub comment_count: i64,
    pub liked_by_me: bool,
}

/// DTO for publishing a blog post.
#[derive(Debug, Deserialize)]
pub struct CreateBlog {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub visibility: Option<String>,
}

/// DTO for editing a blog post. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub visibility: Option<String>,
}

/// Query parameters for the blog feed.
#[derive(Debug, Deserialize)]
pub struct BlogListParams {
    pub author_id: Option<DbId>,
    pub tag: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// A comment joined with its author's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogComment {
    pub id: DbId,
    pub blog_id: DbId,
    pub author_id: DbId,
    pub author_name: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a comment.
#[derive(Debug, Deserialize)]
pub struct CreateBlogComment {
    pub content: String,
}

/// Like state after a toggle.
#[derive(Debug, Clone, Serialize)]
pub struct LikeState {
    pub liked: bool,
    pub like_count: i64,
}

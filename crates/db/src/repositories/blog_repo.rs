//! Repository for `blogs`, `blog_comments` and `blog_likes`.
//!
//! Private posts are visible only to their author. Every read that takes a
//! `viewer_id` applies that rule and reports whether the viewer liked the
//! post.

use sqlx::PgPool;
use stageconnect_core::types::DbId;

use crate::models::blog::{Blog, BlogComment, BlogWithCounts, CreateBlog, LikeState, UpdateBlog};

/// Column list for `blogs` queries.
const COLUMNS: &str = "id, author_id, title, content, excerpt, cover_image_url, tags, \
                        visibility, created_at, updated_at";

/// Select list for [`BlogWithCounts`]. `$1` is the viewer's user id.
const SELECT_WITH_COUNTS: &str = "\
    SELECT b.id, b.author_id, b.title, b.content, b.excerpt, b.cover_image_url, b.tags, \
           b.visibility, b.created_at, b.updated_at, \
           u.name AS author_name, \
           (SELECT COUNT(*) FROM blog_likes l WHERE l.blog_id = b.id) AS like_count, \
           (SELECT COUNT(*) FROM blog_comments c WHERE c.blog_id = b.id) AS comment_count, \
           EXISTS(SELECT 1 FROM blog_likes l WHERE l.blog_id = b.id AND l.user_id = $1) \
               AS liked_by_me \
    FROM blogs b \
    JOIN users u ON u.id = b.author_id \
    WHERE (b.visibility = 'public' OR b.author_id = $1)";

/// Column list for comment queries joined with `users u`.
const COMMENT_COLUMNS: &str = "c.id, c.blog_id, c.author_id, u.name AS author_name, c.content, \
                                c.created_at, c.updated_at";

/// Provides CRUD, like and comment operations for blog posts.
pub struct BlogRepo;

impl BlogRepo {
    /// Publish a post. `excerpt` and `tags` arrive already derived and
    /// normalized.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateBlog,
        excerpt: &str,
        tags: &[String],
    ) -> Result<Blog, sqlx::Error> {
        let query = format!(
            "INSERT INTO blogs \
                (author_id, title, content, excerpt, cover_image_url, tags, visibility) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'public')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(author_id)
            .bind(input.title.trim())
            .bind(&input.content)
            .bind(excerpt)
            .bind(&input.cover_image_url)
            .bind(tags)
            .bind(&input.visibility)
            .fetch_one(pool)
            .await
    }

    /// Find a post by ID regardless of visibility.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE id = $1");
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post visible to `viewer_id`, with counts.
    pub async fn find_with_counts(
        pool: &PgPool,
        id: DbId,
        viewer_id: DbId,
    ) -> Result<Option<BlogWithCounts>, sqlx::Error> {
        let query = format!("{SELECT_WITH_COUNTS} AND b.id = $2");
        sqlx::query_as::<_, BlogWithCounts>(&query)
            .bind(viewer_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Public posts plus the viewer's own, newest first, optionally narrowed to
    /// one author or one tag.
    pub async fn list_public(
        pool: &PgPool,
        viewer_id: DbId,
        author_id: Option<DbId>,
        tag: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogWithCounts>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 2;

        if author_id.is_some() {
            conditions.push(format!("AND b.author_id = ${param_idx}"));
            param_idx += 1;
        }
        if tag.is_some() {
            conditions.push(format!("AND ${param_idx} = ANY(b.tags)"));
            param_idx += 1;
        }

        let query = format!(
            "{SELECT_WITH_COUNTS} {} \
             ORDER BY b.created_at DESC, b.id DESC \
             LIMIT ${param_idx} OFFSET ${}",
            conditions.join(" "),
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, BlogWithCounts>(&query).bind(viewer_id);
        if let Some(aid) = author_id {
            q = q.bind(aid);
        }
        if let Some(t) = tag {
            q = q.bind(t);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// Update a post owned by `author_id`. Only non-`None` fields are
    /// applied; `excerpt` overrides the stored excerpt when given.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        author_id: DbId,
        input: &UpdateBlog,
        excerpt: Option<&str>,
        tags: Option<&[String]>,
    ) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!(
            "UPDATE blogs SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                excerpt = COALESCE($5, excerpt),
                cover_image_url = COALESCE($6, cover_image_url),
                tags = COALESCE($7, tags),
                visibility = COALESCE($8, visibility)
             WHERE id = $1 AND author_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .bind(author_id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.content)
            .bind(excerpt)
            .bind(&input.cover_image_url)
            .bind(tags)
            .bind(&input.visibility)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post owned by `author_id` with its comments and likes.
    pub async fn delete(pool: &PgPool, id: DbId, author_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1 AND author_id = $2")
            .bind(id)
            .bind(author_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Like the post if the user has not, otherwise remove the like.
    pub async fn toggle_like(
        pool: &PgPool,
        blog_id: DbId,
        user_id: DbId,
    ) -> Result<LikeState, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed = sqlx::query("DELETE FROM blog_likes WHERE blog_id = $1 AND user_id = $2")
            .bind(blog_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        if !removed {
            sqlx::query(
                "INSERT INTO blog_likes (blog_id, user_id) VALUES ($1, $2) \
                 ON CONFLICT ON CONSTRAINT uq_blog_likes_blog_user DO NOTHING",
            )
            .bind(blog_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        }

        let like_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blog_likes WHERE blog_id = $1")
                .bind(blog_id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(LikeState {
            liked: !removed,
            like_count,
        })
    }

    /// Add a comment and return it with the author's name.
    pub async fn add_comment(
        pool: &PgPool,
        blog_id: DbId,
        author_id: DbId,
        content: &str,
    ) -> Result<BlogComment, sqlx::Error> {
        let query = format!(
            "WITH c AS ( \
                INSERT INTO blog_comments (blog_id, author_id, content) \
                VALUES ($1, $2, $3) \
                RETURNING * \
             ) \
             SELECT {COMMENT_COLUMNS} FROM c JOIN users u ON u.id = c.author_id"
        );
        sqlx::query_as::<_, BlogComment>(&query)
            .bind(blog_id)
            .bind(author_id)
            .bind(content.trim())
            .fetch_one(pool)
            .await
    }

    /// Comments on a post, oldest first.
    pub async fn list_comments(
        pool: &PgPool,
        blog_id: DbId,
    ) -> Result<Vec<BlogComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COMMENT_COLUMNS} FROM blog_comments c \
             JOIN users u ON u.id = c.author_id \
             WHERE c.blog_id = $1 \
             ORDER BY c.created_at ASC, c.id ASC"
        );
        sqlx::query_as::<_, BlogComment>(&query)
            .bind(blog_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a comment. The comment's author and the post's author may
    /// both remove it.
    pub async fn delete_comment(
        pool: &PgPool,
        comment_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM blog_comments c \
             USING blogs b \
             WHERE c.id = $1 AND b.id = c.blog_id \
               AND (c.author_id = $2 OR b.author_id = $2)",
        )
        .bind(comment_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Post pages.

use actix_web::{HttpResponse, web};

use postboard_core::domain::{NewPost, Post, validate_content};
use postboard_core::error::{DomainError, RepoError};
use postboard_shared::dto::{NewPostForm, UpdateContentForm};

use super::{html, not_found, see_other};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /
pub async fn index() -> HttpResponse {
    see_other("/posts")
}

/// GET /posts - newest first.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_recent().await?;

    let mut ctx = tera::Context::new();
    ctx.insert("posts", &posts);
    Ok(html(state.views.render("posts/list.html", &ctx)?))
}

/// GET /posts/new
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(html(
        state
            .views
            .render("posts/new.html", &tera::Context::new())?,
    ))
}

/// GET /posts/{id}
pub async fn view(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    let mut ctx = tera::Context::new();
    ctx.insert("post", &post);
    Ok(html(state.views.render("posts/view.html", &ctx)?))
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<NewPostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let counters = form.counters();

    let draft = NewPost::new(form.name, form.content, 0, 0)?;
    let (likes, comments) = counters?;
    let post = NewPost {
        likes,
        comments,
        ..draft
    }
    .into_post(state.ids.generate_id());

    let id = post.id.clone();
    state.posts.insert(post).await?;
    tracing::info!(post_id = %id, "Post created");

    Ok(see_other("/posts"))
}

/// GET /posts/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    let mut ctx = tera::Context::new();
    ctx.insert("post", &post);
    Ok(html(state.views.render("posts/edit.html", &ctx)?))
}

/// PATCH /posts/{id} - replace the content.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<UpdateContentForm>,
) -> AppResult<HttpResponse> {
    let content = form.into_inner().content;
    validate_content(&content)?;

    let id = path.into_inner();
    state
        .posts
        .update_content(id.clone(), content)
        .await
        .map_err(not_found("Post"))?;
    tracing::info!(post_id = %id, "Post updated");

    Ok(see_other("/posts"))
}

/// GET /posts/{id}/delete - a missing post is already deleted.
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    match state.posts.delete(id.clone()).await {
        Ok(()) => tracing::info!(post_id = %id, "Post deleted"),
        Err(RepoError::NotFound) => tracing::debug!(post_id = %id, "Post already absent"),
        Err(err) => return Err(err.into()),
    }

    Ok(see_other("/posts"))
}

async fn find_post(state: &AppState, id: String) -> AppResult<Post> {
    match state.posts.find_by_id(id.clone()).await? {
        Some(post) => Ok(post),
        None => Err(DomainError::NotFound {
            entity_type: "Post",
            id,
        }
        .into()),
    }
}

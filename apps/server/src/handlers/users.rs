//! User pages. Changes to an account are confirmed with its password.

use actix_web::{HttpResponse, web};

use postboard_core::domain::{User, validate_user_name};
use postboard_core::error::{DomainError, RepoError};
use postboard_shared::dto::{DeleteUserForm, NewUserForm, RenameUserForm};

use super::{html, not_found, see_other};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.list().await?;
    let count = state.users.count().await?;

    let mut ctx = tera::Context::new();
    ctx.insert("users", &users);
    ctx.insert("count", &count);
    Ok(html(state.views.render("users/list.html", &ctx)?))
}

/// GET /users/add
pub async fn add_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(html(
        state
            .views
            .render("users/add.html", &tera::Context::new())?,
    ))
}

/// POST /users/add
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<NewUserForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    if form.password.is_empty() {
        return Err(AppError::BadRequest("Password is required".to_string()));
    }

    let password_hash = state.passwords.hash(&form.password)?;
    let user = User::new(
        state.ids.generate_id(),
        form.user_name,
        form.email,
        password_hash,
    )?;

    let id = user.id.clone();
    state.users.insert(user).await.map_err(|err| match err {
        RepoError::Constraint(_) => {
            AppError::from(DomainError::Duplicate("Email already registered".to_string()))
        }
        other => AppError::from(other),
    })?;
    tracing::info!(user_id = %id, "User created");

    Ok(see_other("/users"))
}

/// GET /users/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user = find_user(&state, path.into_inner()).await?;

    let mut ctx = tera::Context::new();
    ctx.insert("user", &user);
    Ok(html(state.views.render("users/edit.html", &ctx)?))
}

/// PATCH /users/{id} - rename, confirmed by password.
pub async fn rename(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<RenameUserForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    validate_user_name(&form.user_name)?;

    let user = find_user(&state, path.into_inner()).await?;
    state.passwords.confirm(&user, &form.password)?;

    state
        .users
        .rename(user.id.clone(), form.user_name)
        .await
        .map_err(not_found("User"))?;
    tracing::info!(user_id = %user.id, "User renamed");

    Ok(see_other("/users"))
}

/// GET /users/{id}/delete - confirmation form.
pub async fn delete_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let mut ctx = tera::Context::new();
    ctx.insert("id", &path.into_inner());
    Ok(html(state.views.render("users/delete.html", &ctx)?))
}

/// DELETE /users/{id}/delete - only when email and password both match.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<DeleteUserForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let user = find_user(&state, path.into_inner()).await?;

    if user.email != form.email {
        return Err(DomainError::Unauthorized.into());
    }
    state.passwords.confirm(&user, &form.password)?;

    state
        .users
        .delete(user.id.clone())
        .await
        .map_err(not_found("User"))?;
    tracing::info!(user_id = %user.id, "User deleted");

    Ok(see_other("/users"))
}

async fn find_user(state: &AppState, id: String) -> AppResult<User> {
    match state.users.find_by_id(id.clone()).await? {
        Some(user) => Ok(user),
        None => Err(DomainError::NotFound {
            entity_type: "User",
            id,
        }
        .into()),
    }
}

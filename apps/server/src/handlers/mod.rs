//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

use actix_web::{HttpResponse, http::header, web};

use postboard_core::error::RepoError;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::index))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list))
                .route("", web::post().to(posts::create))
                // Before `/{id}` so "new" is never taken for an id.
                .route("/new", web::get().to(posts::new_form))
                .route("/{id}", web::get().to(posts::view))
                .route("/{id}", web::patch().to(posts::update))
                .route("/{id}/edit", web::get().to(posts::edit_form))
                .route("/{id}/delete", web::get().to(posts::delete)),
        )
        .service(
            web::scope("/users")
                .route("", web::get().to(users::list))
                .route("/add", web::get().to(users::add_form))
                .route("/add", web::post().to(users::create))
                .route("/{id}", web::patch().to(users::rename))
                .route("/{id}/edit", web::get().to(users::edit_form))
                .route("/{id}/delete", web::get().to(users::delete_form))
                .route("/{id}/delete", web::delete().to(users::delete)),
        );
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Report a missing row as `<what> not found`; everything else as usual.
fn not_found(what: &'static str) -> impl Fn(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => AppError::NotFound(format!("{} not found", what)),
        other => other.into(),
    }
}

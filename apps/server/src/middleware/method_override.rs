//! Method override middleware - lets HTML forms issue PATCH and DELETE.
//!
//! Browsers only submit GET and POST, so edit and delete forms post to
//! `...?_method=PATCH` or `...?_method=DELETE`. The rewrite happens before
//! routing, so handlers are registered under their real method.

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
    web,
};
use std::future::{Ready, ready};

use postboard_shared::MethodOverride;

/// Rewrites `POST` requests carrying a `_method` query parameter.
pub struct MethodOverrideMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MethodOverrideMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = MethodOverrideService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodOverrideService { service }))
    }
}

pub struct MethodOverrideService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MethodOverrideService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if req.method() == Method::POST {
            if let Some(method) = overridden_method(req.query_string()) {
                tracing::debug!(method = %method, path = %req.path(), "Method override");
                req.head_mut().method = method;
            }
        }

        self.service.call(req)
    }
}

/// Only PATCH, PUT and DELETE may be tunnelled through POST.
fn overridden_method(query: &str) -> Option<Method> {
    let params = web::Query::<MethodOverride>::from_query(query).ok()?;
    match params.method.as_deref()?.to_ascii_uppercase().as_str() {
        "PATCH" => Some(Method::PATCH),
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

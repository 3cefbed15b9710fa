// api/src/web/filters.rs

//! Request guards that run before a handler and may answer on its behalf.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::ContentType;
use actix_web::{web, Error, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::messages;

/// Rejects requests whose query string lacks the named parameter.
///
/// Only presence is checked: `?id=` and `?id=abc` both pass through. Key names
/// match ignoring ASCII case, so `?Id=1` satisfies a guard on `id`. A missing
/// parameter is answered with 400 and
/// `The '<name>' query parameter is required.`; the wrapped handler never runs.
///
/// # Examples
/// ```ignore
/// web::resource("/DeleteProducts")
///   .wrap(RequireQueryParameter::new("id"))
///   .route(web::delete().to(delete_products_handler));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireQueryParameter {
  name: &'static str,
}

impl RequireQueryParameter {
  pub fn new(name: &'static str) -> Self {
    Self { name }
  }
}

impl<S, B> Transform<S, ServiceRequest> for RequireQueryParameter
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type InitError = ();
  type Transform = RequireQueryParameterMiddleware<S>;
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequireQueryParameterMiddleware {
      service,
      name: self.name,
    }))
  }
}

/// Service wrapper produced by [`RequireQueryParameter`].
pub struct RequireQueryParameterMiddleware<S> {
  service: S,
  name: &'static str,
}

impl<S, B> Service<ServiceRequest> for RequireQueryParameterMiddleware<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    if query_value(req.query_string(), self.name).is_some() {
      let fut = self.service.call(req);
      return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
    }

    warn!(
      parameter = self.name,
      path = %req.path(),
      "Rejecting request without required query parameter."
    );
    let response = HttpResponse::BadRequest()
      .content_type(ContentType::plaintext())
      .body(messages::required_query_parameter(self.name));
    Box::pin(ready(Ok(req.into_response(response).map_into_right_body())))
  }
}

/// First value of the query parameter `name`, keys compared ignoring ASCII case.
///
/// Repeated keys are allowed and later occurrences are ignored.
pub(crate) fn query_value(query_string: &str, name: &str) -> Option<String> {
  web::Query::<Vec<(String, String)>>::from_query(query_string)
    .ok()?
    .into_inner()
    .into_iter()
    .find(|(key, _)| key.eq_ignore_ascii_case(name))
    .map(|(_, value)| value)
}

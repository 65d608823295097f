use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorForbidden, ErrorUnauthorized},
    http::header,
    web, Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;

pub use crate::auth::jwt::Claims;
use crate::auth::jwt::decode_token;
use crate::config::jwt::JwtSettings;

/// Who may pass a guarded scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any active account
    Member,
    /// Active admins and super admins
    Admin,
}

/// Resolves the bearer token of a request into claims and applies `access`.
///
/// Missing, malformed or forged tokens and inactive accounts are 401;
/// an active account without the required role is 403.
pub fn authorize(req: &ServiceRequest, access: Access) -> Result<Claims, Error> {
    let jwt_settings = req
        .app_data::<web::Data<JwtSettings>>()
        .ok_or_else(|| ErrorUnauthorized("JWT settings not found"))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ErrorUnauthorized("No authorization header"))?
        .to_str()
        .map_err(|_| ErrorUnauthorized("Invalid authorization header"))?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ErrorUnauthorized("Invalid authorization header format"))?;

    let claims = decode_token(token, jwt_settings).map_err(|e| {
        tracing::warn!("Failed to decode token: {:?}", e);
        ErrorUnauthorized("Invalid token")
    })?;

    if !claims.is_active() {
        tracing::warn!("Rejected token of {} user {}", claims.status, claims.username);
        return Err(ErrorUnauthorized("Account is not active"));
    }

    if access == Access::Admin && !claims.role.is_admin() {
        tracing::warn!(
            "Non-admin user attempted admin access: {} (role: {})",
            claims.username,
            claims.role
        );
        return Err(ErrorForbidden("Insufficient privileges"));
    }

    Ok(claims)
}

/// Wraps a scope so that only callers with the given [`Access`] reach it.
/// Handlers read the caller through `web::ReqData<Claims>`.
pub struct AuthMiddleware {
    access: Access,
}

impl AuthMiddleware {
    pub fn members() -> Self {
        Self { access: Access::Member }
    }

    pub fn admins() -> Self {
        Self { access: Access::Admin }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            access: self.access,
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    access: Access,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authorize(&req, self.access) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let service = Rc::clone(&self.service);
                Box::pin(async move { service.call(req).await })
            }
            Err(e) => Box::pin(async move { Err(e) }),
        }
    }
}

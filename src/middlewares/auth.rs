use crate::error::AppError;
use crate::utils::JwtService;
use actix_web::http::Method;
use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};

/// Routes reachable without a token. Claim intake, player registration and
/// payment creation are public POSTs used by the on-course kiosk; everything
/// else on those paths stays admin-only.
struct PublicPaths {
    exact_paths: Vec<&'static str>,
    prefix_paths: Vec<&'static str>,
    public_posts: Vec<&'static str>,
    excluded_paths: Vec<&'static str>,
}

impl PublicPaths {
    fn new() -> Self {
        Self {
            exact_paths: vec!["/swagger-ui", "/swagger-ui/", "/api-docs/openapi.json"],
            prefix_paths: vec!["/swagger-ui/", "/api-docs/", "/api/v1/auth/"],
            public_posts: vec!["/api/v1/claims", "/api/v1/players", "/api/v1/payments"],
            // Logout sits under the public auth prefix but still wants a token.
            excluded_paths: vec!["/api/v1/auth/logout"],
        }
    }

    fn is_public(&self, method: &Method, path: &str) -> bool {
        if self.excluded_paths.contains(&path) {
            return false;
        }
        if self.exact_paths.contains(&path) {
            return true;
        }
        if self.prefix_paths.iter().any(|&prefix| path.starts_with(prefix)) {
            return true;
        }
        *method == Method::POST && self.public_posts.contains(&path)
    }
}

pub struct AuthMiddleware {
    jwt_service: JwtService,
}

impl AuthMiddleware {
    pub fn new(jwt_service: JwtService) -> Self {
        Self { jwt_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            jwt_service: self.jwt_service.clone(),
            public_paths: PublicPaths::new(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    jwt_service: JwtService,
    public_paths: PublicPaths,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // CORS preflights pass through.
        if req.method() == Method::OPTIONS {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        if self.public_paths.is_public(req.method(), req.path()) {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let token = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        if let Some(token) = token {
            match self.jwt_service.verify_access_token(token) {
                Ok(claims) => {
                    // Admin identity for downstream handlers.
                    req.extensions_mut().insert(claims.sub);
                    let fut = self.service.call(req);
                    Box::pin(fut)
                }
                Err(_) => {
                    let error = AppError::AuthError("Invalid access token".to_string());
                    Box::pin(async move { Err(error.into()) })
                }
            }
        } else {
            let error = AppError::AuthError("Missing access token".to_string());
            Box::pin(async move { Err(error.into()) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_posts_are_method_scoped() {
        let paths = PublicPaths::new();
        assert!(paths.is_public(&Method::POST, "/api/v1/claims"));
        assert!(!paths.is_public(&Method::GET, "/api/v1/claims"));
        assert!(!paths.is_public(&Method::PATCH, "/api/v1/claims"));
        assert!(paths.is_public(&Method::POST, "/api/v1/players"));
        assert!(!paths.is_public(&Method::DELETE, "/api/v1/players"));
        assert!(paths.is_public(&Method::POST, "/api/v1/payments"));
    }

    #[test]
    fn test_auth_and_docs_are_public() {
        let paths = PublicPaths::new();
        assert!(paths.is_public(&Method::POST, "/api/v1/auth/login"));
        assert!(paths.is_public(&Method::POST, "/api/v1/auth/refresh"));
        assert!(!paths.is_public(&Method::POST, "/api/v1/auth/logout"));
        assert!(paths.is_public(&Method::GET, "/api-docs/openapi.json"));
        assert!(paths.is_public(&Method::GET, "/swagger-ui/index.html"));
    }

    #[test]
    fn test_admin_routes_are_not_public() {
        let paths = PublicPaths::new();
        assert!(!paths.is_public(&Method::GET, "/api/v1/accounting"));
        assert!(!paths.is_public(&Method::POST, "/api/v1/courses"));
        assert!(!paths.is_public(&Method::GET, "/api/v1/claims/7"));
    }
}

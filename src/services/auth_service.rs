use crate::config::AdminConfig;
use crate::error::{AppError, AppResult};
use crate::models::{AuthResponse, LoginRequest, RefreshTokenRequest};
use crate::utils::{verify_password, JwtService};
use log::{info, warn};

#[derive(Clone)]
pub struct AuthService {
    admin: AdminConfig,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(admin: AdminConfig, jwt: JwtService) -> Self {
        Self { admin, jwt }
    }

    /// Single-admin login against the configured bcrypt hash. The response
    /// never distinguishes a wrong email from a wrong password.
    pub async fn login(&self, req: LoginRequest) -> AppResult<AuthResponse> {
        let email = req.email.trim().to_lowercase();
        if self.admin.email.is_empty() || self.admin.password_hash.is_empty() {
            return Err(AppError::ConfigError(
                "Admin credentials are not configured".to_string(),
            ));
        }
        if email != self.admin.email.to_lowercase()
            || !verify_password(&req.password, &self.admin.password_hash)?
        {
            warn!("Failed admin login attempt for {email}");
            return Err(AppError::AuthError("Invalid credentials".to_string()));
        }

        info!("Admin logged in: {email}");
        self.issue_tokens(&email)
    }

    pub async fn refresh(&self, req: RefreshTokenRequest) -> AppResult<AuthResponse> {
        let claims = self.jwt.verify_refresh_token(&req.refresh_token)?;
        self.issue_tokens(&claims.sub)
    }

    fn issue_tokens(&self, email: &str) -> AppResult<AuthResponse> {
        Ok(AuthResponse {
            email: email.to_string(),
            role: "admin".to_string(),
            access_token: self.jwt.generate_access_token(email)?,
            refresh_token: self.jwt.generate_refresh_token(email)?,
            expires_in: self.jwt.get_access_token_expires_in(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::hash_password;

    fn service() -> AuthService {
        AuthService::new(
            AdminConfig {
                email: "admin@par3challenge.com".to_string(),
                password_hash: hash_password("letmein").unwrap(),
            },
            JwtService::new("test-secret", 3600, 86400),
        )
    }

    #[tokio::test]
    async fn test_login_success() {
        let auth = service();
        let resp = auth
            .login(LoginRequest {
                email: "Admin@Par3Challenge.com".to_string(),
                password: "letmein".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(resp.role, "admin");
        assert!(!resp.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let auth = service();
        let result = auth
            .login(LoginRequest {
                email: "admin@par3challenge.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::AuthError(_))));
    }

    #[tokio::test]
    async fn test_refresh_round_trip() {
        let auth = service();
        let resp = auth
            .login(LoginRequest {
                email: "admin@par3challenge.com".to_string(),
                password: "letmein".to_string(),
            })
            .await
            .unwrap();
        let refreshed = auth
            .refresh(RefreshTokenRequest {
                refresh_token: resp.refresh_token,
            })
            .await
            .unwrap();
        assert_eq!(refreshed.email, "admin@par3challenge.com");
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let auth = service();
        let resp = auth
            .login(LoginRequest {
                email: "admin@par3challenge.com".to_string(),
                password: "letmein".to_string(),
            })
            .await
            .unwrap();
        let result = auth
            .refresh(RefreshTokenRequest {
                refresh_token: resp.access_token,
            })
            .await;
        assert!(result.is_err());
    }
}

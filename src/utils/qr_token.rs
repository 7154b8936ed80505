use crate::config::AppConfig;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const ATTENDANCE_TOKEN_TYPE: &str = "attendance";

// 签到令牌 Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrClaims {
    pub sid: i64,           // 课次 ID
    pub cid: i64,           // 课程 ID
    pub token_type: String, // 固定为 "attendance"
    pub iat: usize,         // 签发时间
    pub exp: usize,         // 过期时间
}

// 已签发的令牌
#[derive(Debug, Clone)]
pub struct IssuedQrToken {
    pub token: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

pub struct QrTokenUtils;

impl QrTokenUtils {
    // 按全局配置签发
    pub fn issue(session_id: i64, course_id: i64) -> Result<IssuedQrToken, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::issue_with(
            session_id,
            course_id,
            &config.qr.secret,
            chrono::Duration::seconds(config.qr.token_ttl_seconds),
        )
    }

    // 按全局配置校验
    pub fn verify(token: &str) -> Result<QrClaims, jsonwebtoken::errors::Error> {
        Self::verify_with(token, &AppConfig::get().qr.secret)
    }

    // 使用指定密钥与有效期签发
    pub fn issue_with(
        session_id: i64,
        course_id: i64,
        secret: &str,
        ttl: chrono::Duration,
    ) -> Result<IssuedQrToken, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expires_at = now + ttl;

        let claims = QrClaims {
            sid: session_id,
            cid: course_id,
            token_type: ATTENDANCE_TOKEN_TYPE.to_string(),
            iat: now.timestamp() as usize,
            exp: expires_at.timestamp().max(0) as usize,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;

        Ok(IssuedQrToken { token, expires_at })
    }

    // 使用指定密钥校验签名、有效期与令牌类型
    pub fn verify_with(token: &str, secret: &str) -> Result<QrClaims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<QrClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )?
        .claims;

        if claims.token_type != ATTENDANCE_TOKEN_TYPE {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn test_token_verifies_for_its_session() {
        let issued = QrTokenUtils::issue_with(7, 3, SECRET, chrono::Duration::minutes(5)).unwrap();
        let claims = QrTokenUtils::verify_with(&issued.token, SECRET).unwrap();

        assert_eq!(claims.sid, 7);
        assert_eq!(claims.cid, 3);
        assert_eq!(claims.token_type, "attendance");
        assert!(issued.expires_at > chrono::Utc::now());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issued =
            QrTokenUtils::issue_with(7, 3, SECRET, chrono::Duration::seconds(-120)).unwrap();
        let err = QrTokenUtils::verify_with(&issued.token, SECRET).unwrap_err();

        assert!(matches!(
            err.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issued =
            QrTokenUtils::issue_with(7, 3, "another-secret", chrono::Duration::minutes(5)).unwrap();
        assert!(QrTokenUtils::verify_with(&issued.token, SECRET).is_err());
    }

    #[test]
    fn test_token_of_other_type_is_rejected() {
        let now = chrono::Utc::now().timestamp() as usize;
        let claims = QrClaims {
            sid: 7,
            cid: 3,
            token_type: "access".to_string(),
            iat: now,
            exp: now + 300,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(QrTokenUtils::verify_with(&token, SECRET).is_err());
    }
}

use crate::config::{AppConfig, Argon2Config};
use crate::errors::LedgerError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHasher, Version};

/// 按全局配置的 Argon2 参数哈希密码
pub fn hash_password(password: &str) -> Result<String, LedgerError> {
    hash_password_with(password, &AppConfig::get().argon2)
}

/// 按给定参数哈希密码（Argon2id）
pub fn hash_password_with(password: &str, config: &Argon2Config) -> Result<String, LedgerError> {
    let params = Params::new(
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        None,
    )
    .map_err(|e| LedgerError::validation(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| LedgerError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};

    fn cheap_params() -> Argon2Config {
        Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_verifies_and_is_salted() {
        let first = hash_password_with("s3cretpass", &cheap_params()).unwrap();
        let second = hash_password_with("s3cretpass", &cheap_params()).unwrap();
        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));

        let parsed = PasswordHash::new(&first).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"s3cretpass", &parsed)
                .is_ok()
        );
        assert!(Argon2::default().verify_password(b"wrong", &parsed).is_err());
    }
}

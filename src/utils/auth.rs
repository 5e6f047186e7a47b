/// Header carrying the service-to-service token on every upstream call.
pub const SERVICE_AUTHORIZATION: &str = "ServiceAuthorization";

const BEARER_PREFIX: &str = "Bearer ";

/// 將使用者 token 正規化為 `Bearer <token>` 格式
pub fn bearer_token(token: &str) -> String {
    let token = token.trim();
    match token.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => {
            format!("{}{}", BEARER_PREFIX, token[BEARER_PREFIX.len()..].trim_start())
        }
        _ => format!("{}{}", BEARER_PREFIX, token),
    }
}

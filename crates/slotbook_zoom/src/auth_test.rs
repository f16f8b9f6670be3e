#[cfg(test)]
mod tests {
    use crate::auth::{Claims, TokenIssuer};
    use crate::error::ZoomError;
    use chrono::{TimeZone, Utc};
    use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
    use std::time::Duration;

    const KEY: &str = "zoom-key";
    const SECRET: &str = "zoom-secret";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(KEY, SECRET, Duration::from_secs(60)).unwrap()
    }

    fn decode_claims(token: &str, secret: &str, check_exp: bool) -> jsonwebtoken::errors::Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = check_exp;
        decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
            .map(|data| data.claims)
    }

    #[test]
    fn test_issued_token_carries_issuer_and_future_expiry() {
        let before = Utc::now().timestamp();
        let token = issuer().issue().unwrap();

        let claims = decode_claims(&token, SECRET, true).unwrap();
        assert_eq!(claims.iss, KEY);
        assert!(claims.exp > before);
        assert!(claims.exp <= Utc::now().timestamp() + 60);
    }

    #[test]
    fn test_expiry_is_now_plus_ttl_in_seconds() {
        let now = Utc.with_ymd_and_hms(2021, 5, 10, 18, 46, 2).unwrap();
        let token = issuer().issue_at(now).unwrap();

        let claims = decode_claims(&token, SECRET, false).unwrap();
        assert_eq!(claims.exp, now.timestamp() + 60);
    }

    #[test]
    fn test_header_is_hs256_jwt() {
        let header = decode_header(&issuer().issue().unwrap()).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.typ.as_deref(), Some("JWT"));
    }

    #[test]
    fn test_token_does_not_verify_with_other_secret() {
        let token = issuer().issue().unwrap();
        assert!(decode_claims(&token, "not-the-secret", true).is_err());
    }

    #[test]
    fn test_each_issue_signs_a_new_token() {
        let issuer = issuer();
        let now = Utc::now();
        let first = issuer.issue_at(now).unwrap();
        let second = issuer.issue_at(now + chrono::Duration::seconds(5)).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_blank_credentials_are_rejected() {
        assert!(matches!(
            TokenIssuer::new("", SECRET, Duration::from_secs(60)),
            Err(ZoomError::ConfigError(_))
        ));
        assert!(matches!(
            TokenIssuer::new(KEY, "", Duration::from_secs(60)),
            Err(ZoomError::ConfigError(_))
        ));
        assert!(matches!(
            TokenIssuer::new(KEY, SECRET, Duration::ZERO),
            Err(ZoomError::ConfigError(_))
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", issuer());
        assert!(rendered.contains(KEY));
        assert!(!rendered.contains(SECRET));
    }
}

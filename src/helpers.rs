use std::str::FromStr;

use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    HttpRequest,
};
use anyhow::Context;
use sqlx::types::BigDecimal;

use crate::error::Error;

pub const AUTH_COOKIE: &str = "admin_auth";
pub const AUTH_COOKIE_PATH: &str = "/admin";
pub const AUTH_COOKIE_VALUE: &str = "true";
pub const AUTH_COOKIE_MAX_AGE_DAYS: i64 = 7;

pub fn is_authenticated(req: &HttpRequest) -> bool {
    req.cookie(AUTH_COOKIE)
        .map(|cookie| cookie.value() == AUTH_COOKIE_VALUE)
        .unwrap_or(false)
}

/// Fails with `Unauthorized` unless the admin session cookie is present.
pub fn require_admin(req: &HttpRequest) -> Result<(), Error> {
    if is_authenticated(req) {
        return Ok(());
    }

    Err(Error::Unauthorized())
}

pub fn auth_cookie() -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE, AUTH_COOKIE_VALUE)
        .path(AUTH_COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(CookieDuration::days(AUTH_COOKIE_MAX_AGE_DAYS))
        .finish()
}

/// Expired counterpart of [`auth_cookie`], sent to clear the session.
pub fn removal_auth_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(AUTH_COOKIE, "")
        .path(AUTH_COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Strict)
        .finish();
    cookie.make_removal();
    cookie
}

pub fn to_decimal(value: f64, field: &str) -> Result<BigDecimal, Error> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidOption {
            option: format!("{} must be a non-negative number", field),
        });
    }

    Ok(BigDecimal::from_str(&value.to_string())?)
}

pub fn to_f64(value: &BigDecimal) -> Result<f64, Error> {
    let str_value = value.to_string();
    let p = f64::from_str(&str_value)
        .context("could not parse big decimal to float")?;
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_is_authenticated() {
        let req = TestRequest::default()
            .cookie(Cookie::new(AUTH_COOKIE, "true"))
            .to_http_request();
        assert!(is_authenticated(&req));
        assert!(require_admin(&req).is_ok());

        let req = TestRequest::default()
            .cookie(Cookie::new(AUTH_COOKIE, "false"))
            .to_http_request();
        assert!(!is_authenticated(&req));

        let req = TestRequest::default().to_http_request();
        assert!(!is_authenticated(&req));
        assert!(matches!(require_admin(&req), Err(Error::Unauthorized())));
    }

    #[test]
    fn test_auth_cookie_attributes() {
        let cookie = auth_cookie();

        assert_eq!(cookie.name(), AUTH_COOKIE);
        assert_eq!(cookie.value(), "true");
        assert_eq!(cookie.path(), Some("/admin"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(CookieDuration::days(7)));
    }

    #[test]
    fn test_removal_cookie_expires() {
        let cookie = removal_auth_cookie();

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/admin"));
        assert_eq!(cookie.max_age(), Some(CookieDuration::ZERO));
    }

    #[test]
    fn test_decimal_conversions() {
        let value = to_decimal(104.25, "price").unwrap();
        assert_eq!(value.to_string(), "104.25");
        assert_eq!(to_f64(&value).unwrap(), 104.25);

        assert!(to_decimal(-1.0, "price").is_err());
        assert!(to_decimal(f64::NAN, "balance").is_err());
    }
}

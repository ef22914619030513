/**
 * Session Cookie Manager
 *
 * Issues, reads, and clears the cookies the app uses:
 *
 * - `app_session` - the opaque session token. HTTP-only, `Path=/`,
 *   `SameSite=Lax`, and `Secure` when the server is configured for
 *   production transport. All session state lives server-side; the
 *   cookie is only an opaque reference, so nothing in it needs signing.
 * - `flash` - a one-request notification carrying a localization key
 *   across a redirect. Read and cleared by the next page render.
 *
 * Only response headers are touched here; nothing is persisted.
 */

use axum::http::{header, HeaderMap, HeaderValue};

/// Session cookie name.
pub const SESSION_COOKIE: &str = "app_session";

/// Flash cookie name. The value is a localization key, not display text.
pub const FLASH_COOKIE: &str = "flash";

/// Whether issued cookies are marked `Secure`.
///
/// Carried in application state so handlers don't consult ambient
/// globals for it.
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub secure: bool,
}

impl CookieSettings {
    /// `Set-Cookie` value issuing the session token.
    pub fn issue_session(&self, token: &str) -> HeaderValue {
        self.build(SESSION_COOKIE, token, None)
    }

    /// `Set-Cookie` value clearing the session cookie on the client.
    pub fn clear_session(&self) -> HeaderValue {
        self.build(SESSION_COOKIE, "", Some(0))
    }

    /// `Set-Cookie` value carrying a flash key across one redirect.
    /// Short-lived so a never-rendered flash doesn't linger.
    pub fn set_flash(&self, key: &str) -> HeaderValue {
        self.build(FLASH_COOKIE, key, Some(60))
    }

    /// `Set-Cookie` value clearing the flash cookie.
    pub fn clear_flash(&self) -> HeaderValue {
        self.build(FLASH_COOKIE, "", Some(0))
    }

    fn build(&self, name: &str, value: &str, max_age: Option<u32>) -> HeaderValue {
        let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax");
        if let Some(max_age) = max_age {
            cookie.push_str(&format!("; Max-Age={max_age}"));
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        // Values are hex tokens or dotted locale keys, both valid
        // header characters.
        HeaderValue::from_str(&cookie)
            .unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}

/// Extract the session token from the request, absent if no cookie or
/// a malformed one was sent.
pub fn read_session_token(headers: &HeaderMap) -> Option<String> {
    read_cookie(headers, SESSION_COOKIE)
}

/// Extract the flash key from the request, if any.
pub fn read_flash(headers: &HeaderMap) -> Option<String> {
    read_cookie(headers, FLASH_COOKIE)
}

fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(value) = value.to_str() else { continue };
        for pair in value.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            if parts.next() == Some(name) {
                match parts.next() {
                    Some(v) if !v.is_empty() => return Some(v.to_string()),
                    _ => return None,
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_issue_session_attributes() {
        let settings = CookieSettings { secure: false };
        let cookie = settings.issue_session("abc123");
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with("app_session=abc123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_secure_flag_in_production() {
        let settings = CookieSettings { secure: true };
        let cookie = settings.issue_session("abc123");
        assert!(cookie.to_str().unwrap().contains("Secure"));
    }

    #[test]
    fn test_clear_session_expires_cookie() {
        let settings = CookieSettings { secure: false };
        let cookie = settings.clear_session();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with("app_session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_read_session_token() {
        let headers = headers_with_cookie("app_session=deadbeef; other=1");
        assert_eq!(read_session_token(&headers).as_deref(), Some("deadbeef"));
    }

    #[test]
    fn test_read_absent_or_empty_token() {
        assert_eq!(read_session_token(&HeaderMap::new()), None);
        let headers = headers_with_cookie("app_session=");
        assert_eq!(read_session_token(&headers), None);
        let headers = headers_with_cookie("unrelated=value");
        assert_eq!(read_session_token(&headers), None);
    }

    #[test]
    fn test_flash_round_trip() {
        let settings = CookieSettings { secure: false };
        let set = settings.set_flash("sessions.destroy.success");
        assert!(set.to_str().unwrap().contains("flash=sessions.destroy.success"));

        let headers = headers_with_cookie("flash=sessions.destroy.success");
        assert_eq!(
            read_flash(&headers).as_deref(),
            Some("sessions.destroy.success")
        );
    }
}

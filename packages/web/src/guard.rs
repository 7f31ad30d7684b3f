//! Server-side route protection over the persisted session cookies.
//!
//! Pages under the protected prefixes require both session cookies to be
//! present, and profile pages additionally require the id embedded in the
//! path to match the persisted user record. Any failure — missing cookie,
//! undecodable value, corrupt JSON, id mismatch — redirects to the login
//! page. The decision consumes the session store's persistence format; it
//! never reimplements the store itself.

use percent_encoding::percent_decode_str;
use state::SessionUser;

/// Path prefixes that require an authenticated session.
pub const PROTECTED_PREFIXES: &[&str] = &["/profile", "/settings", "/orders"];

/// Where failed checks send the browser.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of the guard check for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Decide whether a request may proceed, given the raw (still percent-encoded)
/// cookie values.
pub fn check(path: &str, auth_token: Option<&str>, user_data: Option<&str>) -> GuardDecision {
    let protected = PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix));
    if !protected {
        return GuardDecision::Allow;
    }

    let (Some(token), Some(raw_user)) = (auth_token, user_data) else {
        return GuardDecision::RedirectToLogin;
    };
    if token.is_empty() {
        return GuardDecision::RedirectToLogin;
    }

    if let Some(path_id) = profile_path_id(path) {
        let Ok(decoded) = percent_decode_str(raw_user).decode_utf8() else {
            return GuardDecision::RedirectToLogin;
        };
        let Ok(user) = serde_json::from_str::<SessionUser>(&decoded) else {
            return GuardDecision::RedirectToLogin;
        };
        if user.id != path_id {
            return GuardDecision::RedirectToLogin;
        }
    }

    GuardDecision::Allow
}

/// The id segment of `/profile/<id>` paths, if present and non-empty.
fn profile_path_id(path: &str) -> Option<&str> {
    let rest = path.strip_prefix("/profile/")?;
    let id = rest.split('/').next()?;
    (!id.is_empty()).then_some(id)
}

/// Axum middleware applying [`check`] to every request before it reaches the
/// application.
#[cfg(feature = "server")]
pub async fn require_session(
    request: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    use axum::response::{IntoResponse, Redirect};

    let path = request.uri().path().to_string();
    let header = request
        .headers()
        .get(axum::http::header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let auth_token = cookie_value(header, state::TOKEN_KEY);
    let user_data = cookie_value(header, state::USER_KEY);

    match check(&path, auth_token.as_deref(), user_data.as_deref()) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::RedirectToLogin => {
            tracing::debug!("guard redirected {path} to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}

#[cfg(feature = "server")]
fn cookie_value(header: &str, name: &str) -> Option<String> {
    cookie::Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{"id":"u1","name":"Ada","email":"ada@example.com","isAdmin":false}"#;

    fn encoded(raw: &str) -> String {
        use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
        utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
    }

    #[test]
    fn unprotected_paths_pass_without_cookies() {
        for path in ["/", "/products", "/products/p1", "/cart", "/login"] {
            assert_eq!(check(path, None, None), GuardDecision::Allow, "{path}");
        }
    }

    #[test]
    fn protected_paths_require_both_cookies() {
        assert_eq!(
            check("/orders", None, None),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            check("/settings", Some("tok"), None),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            check("/orders", None, Some(USER_JSON)),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            check("/orders", Some("tok"), Some(USER_JSON)),
            GuardDecision::Allow
        );
    }

    #[test]
    fn empty_token_is_rejected() {
        assert_eq!(
            check("/orders", Some(""), Some(USER_JSON)),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn profile_path_must_match_persisted_id() {
        let user = encoded(USER_JSON);
        assert_eq!(
            check("/profile/u1", Some("tok"), Some(&user)),
            GuardDecision::Allow
        );
        assert_eq!(
            check("/profile/u2", Some("tok"), Some(&user)),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn profile_root_needs_no_id_match() {
        assert_eq!(
            check("/profile", Some("tok"), Some(USER_JSON)),
            GuardDecision::Allow
        );
        // Trailing slash with no id segment behaves the same.
        assert_eq!(
            check("/profile/", Some("tok"), Some(USER_JSON)),
            GuardDecision::Allow
        );
    }

    #[test]
    fn corrupt_user_data_redirects_profile_pages() {
        assert_eq!(
            check("/profile/u1", Some("tok"), Some("not-json")),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            check("/profile/u1", Some("tok"), Some("%FF%FE")),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn unencoded_user_data_still_parses() {
        // Lax writers may store the JSON verbatim; decode_utf8 passes it
        // through untouched.
        assert_eq!(
            check("/profile/u1", Some("tok"), Some(USER_JSON)),
            GuardDecision::Allow
        );
    }
}

/**
 * Server-Rendered Views
 *
 * Plain-string HTML rendering for the handful of pages the app serves.
 * There is no template engine: pages are assembled by small functions
 * that share a common layout, and every interpolated value goes through
 * `escape_html` first.
 *
 * # Pages
 *
 * - `feed_page` - the landing page, anonymous or greeting the account
 * - `login_form` - GET /login, also re-rendered on failed login
 * - `signup_form` - GET /sign_up, also re-rendered on invalid input
 * - `error_page` - generic error rendering used by `AppError`
 */

use crate::i18n::Locales;

/// Escape a value for interpolation into HTML text or attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format the document title.
///
/// With a page-specific title this is `"<page> | <app_name>"`; without
/// one it is just the app name.
pub fn page_title(locales: &Locales, page: Option<&str>) -> String {
    let app_name = locales.t("app_name");
    match page {
        Some(page) => format!("{page} | {app_name}"),
        None => app_name,
    }
}

/// Shared page layout: head, optional `.notification` banner, body.
fn layout(locales: &Locales, page: Option<&str>, notification: Option<&str>, body: &str) -> String {
    let title = escape_html(&page_title(locales, page));
    let banner = match notification {
        Some(message) => format!(
            r#"<div class="notification">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header><a href="/" class="brand">{app_name}</a></header>
{banner}
<main>
{body}
</main>
</body>
</html>"#,
        title = title,
        app_name = escape_html(&locales.t("app_name")),
        banner = banner,
        body = body,
    )
}

/// Landing page. Greets the account when logged in, links to login and
/// sign-up otherwise. `notice` carries a resolved flash message.
pub fn feed_page(locales: &Locales, account_name: Option<&str>, notice: Option<&str>) -> String {
    let body = match account_name {
        Some(name) => format!(
            r#"<h1>Your feed</h1>
<p>Signed in as {name}.</p>
<form action="/logout" method="post" class="logout"
      onsubmit="event.preventDefault();fetch('/logout',{{method:'DELETE'}}).then(function(r){{window.location=r.url;}});">
<button type="submit">Log out</button>
</form>"#,
            name = escape_html(name)
        ),
        None => r#"<h1>Your feed</h1>
<p><a href="/login">Log in</a> or <a href="/sign_up">sign up</a> to get started.</p>"#
            .to_string(),
    };
    layout(locales, None, notice, &body)
}

/// Login form. `error` is the already-localized failure notification;
/// `email` re-fills the field after a failed attempt.
pub fn login_form(locales: &Locales, error: Option<&str>, email: &str) -> String {
    let body = format!(
        r#"<h1>Log in</h1>
<form action="/login" method="post">
<label for="email">Email</label>
<input type="email" id="email" name="user[email]" value="{email}" required>
<label for="password">Password</label>
<input type="password" id="password" name="user[password]" required>
<button type="submit">Log in</button>
</form>
<p><a href="/sign_up">Sign up</a> if you don't have an account yet.</p>"#,
        email = escape_html(email)
    );
    layout(locales, Some("Log in"), error, &body)
}

/// Registration form. `errors` are validation messages from a rejected
/// submission; `name`/`email` re-fill the fields.
pub fn signup_form(locales: &Locales, errors: &[String], name: &str, email: &str) -> String {
    let error_list = if errors.is_empty() {
        String::new()
    } else {
        let items: String = errors
            .iter()
            .map(|e| format!("<li>{}</li>", escape_html(e)))
            .collect();
        format!(r#"<ul class="errors">{items}</ul>"#)
    };
    let body = format!(
        r#"<h1>Sign up</h1>
{error_list}
<form action="/sign_up" method="post">
<label for="name">Name</label>
<input type="text" id="name" name="user[name]" value="{name}" required>
<label for="email">Email</label>
<input type="email" id="email" name="user[email]" value="{email}" required>
<label for="password">Password</label>
<input type="password" id="password" name="user[password]" required>
<button type="submit">Sign up</button>
</form>"#,
        error_list = error_list,
        name = escape_html(name),
        email = escape_html(email),
    );
    layout(locales, Some("Sign up"), None, &body)
}

/// Minimal error page used by the `AppError` response conversion, which
/// runs without access to application state.
pub fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Error</title></head>
<body><div class="notification">{}</div></body>
</html>"#,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_formats_page_specific_title() {
        let locales = Locales::load_default();
        assert_eq!(
            page_title(&locales, Some("Page Title")),
            format!("Page Title | {}", locales.t("app_name"))
        );
    }

    #[test]
    fn test_returns_app_name_when_page_title_is_missing() {
        let locales = Locales::load_default();
        assert_eq!(page_title(&locales, None), locales.t("app_name"));
    }

    #[test]
    fn test_escapes_html() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_login_form_renders_notification() {
        let locales = Locales::load_default();
        let message = locales.t("sessions.create.incorrect_details");
        let html = login_form(&locales, Some(&message), "jerry@example.com");
        assert!(html.contains(r#"class="notification""#));
        assert!(html.contains(&escape_html(&message)));
        assert!(html.contains("jerry@example.com"));
    }

    #[test]
    fn test_feed_page_greets_account() {
        let locales = Locales::load_default();
        let html = feed_page(&locales, Some("Jerry"), None);
        assert!(html.contains("Jerry"));
        assert!(html.contains("/logout"));
    }

    #[test]
    fn test_feed_page_anonymous_links_to_login() {
        let locales = Locales::load_default();
        let html = feed_page(&locales, None, None);
        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains(r#"href="/sign_up""#));
        assert!(!html.contains("/logout"));
    }
}

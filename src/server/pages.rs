use axum::response::Html;

pub(crate) const INDEX_HTML: &str = include_str!("html/index.html");
pub(crate) const LOGIN_HTML: &str = include_str!("html/login.html");
pub(crate) const INVALID_CODE_HTML: &str = "<h1>Invalid code</h1>";
pub(crate) const NOT_FOUND_TEXT: &str = "404 Not Found";

pub(super) async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(super) async fn login_handler() -> Html<&'static str> {
    Html(LOGIN_HTML)
}

//! Static HTML pages read from the configured pages directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{self, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::error::PageError;
use crate::state::AppState;

/// `GET /`
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let path = Path::new(&state.server.pages_dir).join("index.html");
    Ok(Html(tokio::fs::read_to_string(path).await?))
}

/// `GET /paginas/{nombre}`
///
/// Serves `<pages_dir>/pages/<nombre>.html`. Unknown or malformed names
/// redirect to `/`.
pub async fn named_page(
    State(state): State<Arc<AppState>>,
    extract::Path(nombre): extract::Path<String>,
) -> Response {
    let Some(path) = page_path(&state.server.pages_dir, &nombre) else {
        return Redirect::to("/").into_response();
    };

    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Html(body).into_response(),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            Redirect::to("/").into_response()
        }
        Err(error) => PageError::Io(error).into_response(),
    }
}

/// Names are limited to ASCII letters, digits, `_` and `-`, which keeps the
/// lookup inside `pages/`.
fn is_valid_page_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

fn page_path(pages_dir: &str, name: &str) -> Option<PathBuf> {
    is_valid_page_name(name).then(|| {
        Path::new(pages_dir)
            .join("pages")
            .join(format!("{name}.html"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names() {
        assert!(is_valid_page_name("forms_redirect"));
        assert!(is_valid_page_name("about-us2"));
        assert!(!is_valid_page_name(""));
        assert!(!is_valid_page_name("../secret"));
        assert!(!is_valid_page_name("a.b"));
        assert!(!is_valid_page_name("página"));
    }

    #[test]
    fn page_path_stays_under_pages() {
        assert_eq!(
            page_path("web/pages", "forms_redirect"),
            Some(PathBuf::from("web/pages/pages/forms_redirect.html"))
        );
        assert_eq!(page_path("web/pages", "../x"), None);
    }
}

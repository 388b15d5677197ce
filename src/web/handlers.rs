// Route handlers and page rendering.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};
use serde::Deserialize;
use tracing::info;

use crate::fetch::Headline;
use crate::similarity::match_headlines;
use crate::text::{extract_keywords, StopwordList};
use crate::web::AppState;

/// The one form field the page submits.
#[derive(Debug, Deserialize)]
pub struct QueryForm {
    pub user_input: String,
}

/// GET / — the empty form.
pub async fn index() -> Html<String> {
    Html(render_page(&[]))
}

/// POST / — run the full pipeline and render the match list.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<QueryForm>,
) -> Html<String> {
    let keywords = extract_keywords(&form.user_input, StopwordList::Corpus);
    info!(keywords = keywords.len(), "processing form submission");

    // Sources are fetched one after another; a slow site delays the whole
    // response, bounded by the per-attempt timeout times the retry count.
    let mut headlines: Vec<Headline> = Vec::new();
    for source in state.sources.iter() {
        headlines.extend(state.fetcher.fetch_headlines(source).await);
    }

    let matches = match_headlines(&keywords, &headlines, state.config.similarity_threshold);

    Html(render_page(&matches))
}

/// GET /health — liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Render the form page, with the given match lines (possibly none)
/// listed underneath. Match text is scraped from third-party sites, so it
/// is escaped before insertion.
pub fn render_page(matches: &[String]) -> String {
    let results = if matches.is_empty() {
        String::new()
    } else {
        let items: String = matches
            .iter()
            .map(|m| format!("      <li>{}</li>\n", html_escape::encode_text(m)))
            .collect();
        format!("    <h2>Matched headlines</h2>\n    <ul>\n{items}    </ul>\n")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>newsmatch</title></head>
<body>
  <h1>Headline matcher</h1>
  <form method="post" action="/">
    <textarea name="user_input" rows="4" cols="60"></textarea>
    <br><button type="submit">Find matching headlines</button>
  </form>
{results}</body>
</html>
"#
    )
}

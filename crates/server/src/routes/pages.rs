//! Page handlers for the two routed views

use axum::{extract::State, response::Html};
use pmtct_core::DashboardIndicator;

use crate::openmrs::OpenmrsClient;

/// Shown in place of a count that could not be loaded
const MISSING_COUNT: &str = "--";

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<main>\n<h1>{title}</h1>\n{body}</main>\n\
         </body>\n</html>\n"
    ))
}

/// GET {base}/ohri-home - PMTCT home dashboard.
///
/// A failed count is logged and rendered as a placeholder; the page itself
/// always renders.
pub async fn ohri_home(State(client): State<OpenmrsClient>) -> Html<String> {
    let client = &client;
    let counts = futures::future::join_all(
        DashboardIndicator::ALL
            .iter()
            .map(|&indicator| async move { (indicator, client.get_indicator(indicator).await) }),
    )
    .await;

    let mut tiles = String::new();
    for (indicator, count) in counts {
        let value = match count {
            Ok(n) => n.to_string(),
            Err(e) => {
                tracing::error!(
                    report_id = indicator.report_id(),
                    error = %e,
                    "Failed to load dashboard count"
                );
                MISSING_COUNT.to_string()
            }
        };
        tiles.push_str(&format!(
            "<section class=\"tile\" data-report=\"{}\">\n<h2>{}</h2>\n<p class=\"count\">{}</p>\n</section>\n",
            indicator.report_id(),
            indicator.label(),
            value
        ));
    }

    layout("PMTCT Home", &tiles)
}

/// GET {base}/form-render-test - placeholder view for exercising form rendering
pub async fn form_render_test() -> Html<String> {
    layout(
        "Form Render Test",
        "<div id=\"form-render-target\" data-mode=\"enter\"></div>\n",
    )
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus::prelude::*;

use crate::view::render_page;

/// Renders an error page with the given status.
pub fn render(status: StatusCode, message: &str) -> Response {
    let heading = status.canonical_reason().unwrap_or("Error");
    let code = status.as_u16();

    let page = render_page(
        heading,
        None,
        rsx! {
            div {
                class: "text-center py-16",
                h1 { class: "text-6xl font-bold mb-4", "{code}" }
                p { class: "text-xl mb-8", "{message}" }
                a { href: "/", class: "btn btn-primary", "Back home" }
            }
        },
    );

    (status, page).into_response()
}

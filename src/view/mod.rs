//! Server-rendered HTML pages.
//!
//! Pages are dioxus `rsx!` trees rendered to strings with `dioxus-ssr`. Each page module
//! exposes plain functions that take the data a handler loaded and return the finished
//! document, wrapped in the shared [`layout::Layout`].

pub mod account;
pub mod bird;
pub mod error;
pub mod layout;
pub mod page;
pub mod toy;

use axum::response::Html;
use dioxus::prelude::*;

use crate::{server::model::user::User, view::layout::Layout};

pub const SITE_NAME: &str = "Bird Collector";

/// Renders `content` inside the site layout as a complete HTML document.
pub fn render_page(title: &str, user: Option<User>, content: Element) -> Html<String> {
    let document = dioxus_ssr::render_element(rsx! {
        Layout {
            title: title.to_string(),
            user,
            {content}
        }
    });

    Html(format!(
        "<!DOCTYPE html><html lang=\"en\" data-theme=\"dark\">{}</html>",
        document
    ))
}

/// Bulleted list of form errors; renders nothing when there are none.
pub fn error_list(errors: &[String]) -> Element {
    if errors.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "alert alert-error mb-4",
            ul {
                for message in errors {
                    li { "{message}" }
                }
            }
        }
    }
}

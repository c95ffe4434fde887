//! Static pages.

use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    server::model::user::User,
    view::{render_page, SITE_NAME},
};

pub fn home(user: Option<User>) -> Html<String> {
    let logged_in = user.is_some();

    render_page(
        "Home",
        user,
        rsx! {
            div {
                class: "hero min-h-[60vh]",
                div {
                    class: "hero-content text-center",
                    div {
                        h1 { class: "text-5xl font-bold", "{SITE_NAME}" }
                        p { class: "py-6", "Keep track of your birds, what they eat and what they play with." }
                        if logged_in {
                            a { href: "/birds/", class: "btn btn-primary", "View your birds" }
                        } else {
                            a { href: "/accounts/signup/", class: "btn btn-primary", "Get started" }
                        }
                    }
                }
            }
        },
    )
}

pub fn about(user: Option<User>) -> Html<String> {
    render_page(
        "About",
        user,
        rsx! {
            h1 { class: "text-3xl font-bold mb-4", "About" }
            p {
                class: "mb-2",
                "{SITE_NAME} is a small log for bird keepers. Record each bird, note every meal, "
                "share toys between birds and keep a gallery of photos."
            }
            p { "A bird counts as fed for the day once breakfast, lunch and dinner are logged." }
        },
    )
}

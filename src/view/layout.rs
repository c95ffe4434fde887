use dioxus::prelude::*;

use crate::{server::model::user::User, view::SITE_NAME};

const TAILWIND_CDN: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
const DAISYUI_CDN: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";

#[component]
pub fn Layout(title: String, #[props(!optional)] user: Option<User>, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            title { "{title} | {SITE_NAME}" }
            link { rel: "stylesheet", href: DAISYUI_CDN }
            script { src: TAILWIND_CDN }
        }
        body {
            Header { user }
            div {
                class: "min-h-screen pt-24 p-4 max-w-4xl mx-auto",
                {children}
            }
        }
    }
}

/// Top navigation. Links depend on whether somebody is logged in.
#[component]
pub fn Header(#[props(!optional)] user: Option<User>) -> Element {
    rsx! {
        div {
            class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
            div {
                class: "flex items-center",
                a {
                    href: "/",
                    class: "md:text-xl text-wrap",
                    {SITE_NAME}
                }
            }
            div {
                class: "flex items-center gap-2",
                a { href: "/about/", class: "btn btn-ghost", "About" }
                if let Some(user) = &user {
                    a { href: "/birds/", class: "btn btn-ghost", "All Birds" }
                    a { href: "/birds/create/", class: "btn btn-ghost", "Add a Bird" }
                    a { href: "/toys/", class: "btn btn-ghost", "All Toys" }
                    a { href: "/toys/create/", class: "btn btn-ghost", "Add a Toy" }
                    form {
                        method: "post",
                        action: "/accounts/logout/",
                        button {
                            r#type: "submit",
                            class: "btn btn-outline",
                            title: "Logged in as {user.username}",
                            "Logout"
                        }
                    }
                } else {
                    a { href: "/accounts/login/", class: "btn btn-outline", "Login" }
                    a { href: "/accounts/signup/", class: "btn btn-primary", "Sign Up" }
                }
            }
        }
    }
}

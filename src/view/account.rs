//! Signup and login pages.

use axum::response::Html;
use dioxus::prelude::*;

use crate::view::render_page;

pub fn signup(username: &str, error: Option<&str>) -> Html<String> {
    render_page(
        "Sign Up",
        None,
        rsx! {
            h1 { class: "text-3xl font-bold mb-6", "Sign Up" }
            if let Some(error) = error {
                div { class: "alert alert-error mb-4", "{error}" }
            }
            form {
                method: "post",
                action: "/accounts/signup/",
                class: "flex flex-col gap-4 max-w-md",
                {username_input(username)}
                {password_input("Password", "password1")}
                {password_input("Password confirmation", "password2")}
                button { r#type: "submit", class: "btn btn-primary", "Sign Up" }
            }
        },
    )
}

pub fn login(username: &str, error: Option<&str>) -> Html<String> {
    render_page(
        "Login",
        None,
        rsx! {
            h1 { class: "text-3xl font-bold mb-6", "Login" }
            if let Some(error) = error {
                div { class: "alert alert-error mb-4", "{error}" }
            }
            form {
                method: "post",
                action: "/accounts/login/",
                class: "flex flex-col gap-4 max-w-md",
                {username_input(username)}
                {password_input("Password", "password")}
                button { r#type: "submit", class: "btn btn-primary", "Login" }
            }
            p {
                class: "mt-4",
                "No account yet? "
                a { href: "/accounts/signup/", class: "link link-primary", "Sign up" }
            }
        },
    )
}

fn username_input(username: &str) -> Element {
    rsx! {
        label {
            class: "form-control",
            span { class: "label-text", "Username" }
            input {
                r#type: "text",
                name: "username",
                value: "{username}",
                class: "input input-bordered",
            }
        }
    }
}

fn password_input(label: &str, name: &str) -> Element {
    rsx! {
        label {
            class: "form-control",
            span { class: "label-text", "{label}" }
            input {
                r#type: "password",
                name: "{name}",
                class: "input input-bordered",
            }
        }
    }
}

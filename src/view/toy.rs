//! Toy pages.

use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::toy::ToyDto,
    server::model::{toy::Toy, user::User},
    view::{bird::text_input, error_list, render_page},
};

pub fn index(user: User, toys: Vec<Toy>) -> Html<String> {
    render_page(
        "Toys",
        Some(user),
        rsx! {
            h1 { class: "text-3xl font-bold mb-6", "Toy List" }
            if toys.is_empty() {
                p { "No toys yet." }
            }
            ul {
                class: "flex flex-col gap-2",
                for toy in toys.iter() {
                    li {
                        a {
                            href: "/toys/{toy.id}/",
                            class: "block bg-base-200 hover:bg-base-300 rounded-box p-3",
                            "A {toy.color} {toy.description}"
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(user: User, toy: Toy) -> Html<String> {
    render_page(
        "Toy",
        Some(user),
        rsx! {
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    h1 { class: "card-title text-3xl", "{toy.color}" }
                    p { "{toy.description}" }
                    div {
                        class: "card-actions justify-end",
                        a { href: "/toys/{toy.id}/update/", class: "btn btn-outline", "Edit" }
                        a { href: "/toys/{toy.id}/delete/", class: "btn btn-error btn-outline", "Delete" }
                    }
                }
            }
        },
    )
}

/// Create and update share one form; `action` decides where it posts.
pub fn form(
    user: User,
    title: &str,
    action: &str,
    dto: ToyDto,
    errors: Vec<String>,
) -> Html<String> {
    render_page(
        title,
        Some(user),
        rsx! {
            h1 { class: "text-3xl font-bold mb-6", "{title}" }
            {error_list(&errors)}
            form {
                method: "post",
                action: "{action}",
                class: "flex flex-col gap-4 max-w-md",
                {text_input("Color", "color", &dto.color)}
                {text_input("Description", "description", &dto.description)}
                button { r#type: "submit", class: "btn btn-primary", "Submit" }
            }
        },
    )
}

pub fn confirm_delete(user: User, toy: Toy) -> Html<String> {
    render_page(
        "Delete Toy",
        Some(user),
        rsx! {
            h1 { class: "text-3xl font-bold mb-4", "Delete the {toy.color} {toy.description}?" }
            p { class: "mb-6", "Birds that have this toy will lose it." }
            form {
                method: "post",
                action: "/toys/{toy.id}/delete/",
                class: "flex gap-2",
                button { r#type: "submit", class: "btn btn-error", "Yes, delete" }
                a { href: "/toys/{toy.id}/", class: "btn btn-ghost", "Cancel" }
            }
        },
    )
}

//! Bird pages: list, detail, create and update forms, delete confirmation.

use axum::response::Html;
use chrono::NaiveDate;
use dioxus::prelude::*;
use entity::feeding::Meal;

use crate::{
    model::bird::{CreateBirdDto, UpdateBirdDto},
    server::model::{
        bird::{Bird, BirdDetail},
        feeding::DATE_FORMAT,
        toy::Toy,
        user::User,
    },
    view::{error_list, render_page},
};

pub fn index(user: User, birds: Vec<Bird>) -> Html<String> {
    render_page(
        "Birds",
        Some(user),
        rsx! {
            h1 { class: "text-3xl font-bold mb-6", "Bird List" }
            if birds.is_empty() {
                p {
                    "No birds yet. "
                    a { href: "/birds/create/", class: "link link-primary", "Add your first bird." }
                }
            }
            div {
                class: "grid gap-4 md:grid-cols-2",
                for bird in birds.iter() {
                    {bird_card(bird)}
                }
            }
        },
    )
}

fn bird_card(bird: &Bird) -> Element {
    let href = format!("/birds/{}/", bird.id);

    rsx! {
        a {
            href: "{href}",
            class: "card bg-base-200 hover:bg-base-300",
            div {
                class: "card-body",
                h2 { class: "card-title", "{bird.name}" }
                p { "{bird.breed}" }
                p { class: "text-sm opacity-70", {age_text(bird.age)} }
            }
        }
    }
}

fn age_text(age: i32) -> String {
    match age {
        0 => "Less than a year old".to_string(),
        1 => "1 year old".to_string(),
        n => format!("{} years old", n),
    }
}

pub fn detail(user: User, detail: BirdDetail, today: NaiveDate) -> Html<String> {
    let BirdDetail {
        bird,
        feedings,
        toys,
        available_toys,
        photos,
        fed_for_today,
    } = detail;
    let base = format!("/birds/{}", bird.id);
    let today = today.format(DATE_FORMAT).to_string();

    render_page(
        &bird.name,
        Some(user),
        rsx! {
            div {
                class: "card bg-base-200 mb-6",
                div {
                    class: "card-body",
                    h1 { class: "card-title text-3xl", "{bird.name}" }
                    p { "Breed: {bird.breed}" }
                    if !bird.description.is_empty() {
                        p { "{bird.description}" }
                    }
                    p { {age_text(bird.age)} }
                    div {
                        class: "card-actions justify-end",
                        a { href: "{base}/update/", class: "btn btn-outline", "Edit" }
                        a { href: "{base}/delete/", class: "btn btn-error btn-outline", "Delete" }
                    }
                }
            }

            section {
                class: "mb-6",
                h2 { class: "text-2xl font-bold mb-2", "Photos" }
                div {
                    class: "flex flex-wrap gap-2 mb-4",
                    for photo in photos.iter() {
                        img {
                            src: "{photo.url}",
                            alt: "Photo of {bird.name}",
                            class: "w-40 h-40 object-cover rounded-box",
                        }
                    }
                    if photos.is_empty() {
                        p { class: "opacity-70", "No photos uploaded." }
                    }
                }
                form {
                    method: "post",
                    action: "{base}/add-photo/",
                    enctype: "multipart/form-data",
                    class: "flex gap-2 items-center",
                    input {
                        r#type: "file",
                        name: "photo-file",
                        class: "file-input file-input-bordered",
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Upload Photo" }
                }
            }

            section {
                class: "mb-6",
                h2 { class: "text-2xl font-bold mb-2", "Feedings" }
                if fed_for_today {
                    div { class: "alert alert-success mb-4", "{bird.name} has been fed all meals for today" }
                } else {
                    div { class: "alert alert-warning mb-4", "{bird.name} might be hungry" }
                }
                form {
                    method: "post",
                    action: "{base}/feedings/",
                    class: "flex gap-2 items-end mb-4",
                    label {
                        class: "form-control",
                        span { class: "label-text", "Feeding Date" }
                        input {
                            r#type: "date",
                            name: "date",
                            value: "{today}",
                            class: "input input-bordered",
                        }
                    }
                    label {
                        class: "form-control",
                        span { class: "label-text", "Meal" }
                        select {
                            name: "meal",
                            class: "select select-bordered",
                            for meal in Meal::ALL {
                                option { value: meal.code(), {meal.label()} }
                            }
                        }
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Add Feeding" }
                }
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Meal" }
                        }
                    }
                    tbody {
                        for feeding in feedings.iter() {
                            tr {
                                td { {feeding.date.format(DATE_FORMAT).to_string()} }
                                td { {feeding.meal.label()} }
                            }
                        }
                    }
                }
            }

            section {
                class: "grid gap-4 md:grid-cols-2",
                div {
                    h2 { class: "text-2xl font-bold mb-2", "{bird.name}'s Toys" }
                    if toys.is_empty() {
                        p { class: "opacity-70", "{bird.name} doesn't have any toys." }
                    }
                    for toy in toys.iter() {
                        {toy_row(toy, &format!("{}/remove-toy/{}/", base, toy.id), "Remove")}
                    }
                }
                div {
                    h2 { class: "text-2xl font-bold mb-2", "Available Toys" }
                    if available_toys.is_empty() {
                        p { class: "opacity-70", "{bird.name} already has all available toys." }
                    }
                    for toy in available_toys.iter() {
                        {toy_row(toy, &format!("{}/associate-toy/{}/", base, toy.id), "Give toy")}
                    }
                }
            }
        },
    )
}

fn toy_row(toy: &Toy, action: &str, label: &str) -> Element {
    rsx! {
        div {
            class: "flex justify-between items-center bg-base-200 rounded-box p-3 mb-2",
            a {
                href: "/toys/{toy.id}/",
                class: "link",
                "A {toy.color} {toy.description}"
            }
            form {
                method: "post",
                action: "{action}",
                button { r#type: "submit", class: "btn btn-sm btn-outline", "{label}" }
            }
        }
    }
}

pub fn create_form(user: User, dto: CreateBirdDto, errors: Vec<String>) -> Html<String> {
    render_page(
        "Add a Bird",
        Some(user),
        rsx! {
            h1 { class: "text-3xl font-bold mb-6", "Add a Bird" }
            {error_list(&errors)}
            form {
                method: "post",
                action: "/birds/create/",
                class: "flex flex-col gap-4 max-w-md",
                {text_input("Name", "name", &dto.name)}
                {bird_fields(&dto.breed, &dto.description, &dto.age)}
                button { r#type: "submit", class: "btn btn-primary", "Submit" }
            }
        },
    )
}

pub fn update_form(user: User, bird: Bird, dto: UpdateBirdDto, errors: Vec<String>) -> Html<String> {
    let title = format!("Edit {}", bird.name);

    render_page(
        &title,
        Some(user),
        rsx! {
            h1 { class: "text-3xl font-bold mb-6", "{title}" }
            {error_list(&errors)}
            form {
                method: "post",
                action: "/birds/{bird.id}/update/",
                class: "flex flex-col gap-4 max-w-md",
                {bird_fields(&dto.breed, &dto.description, &dto.age)}
                div {
                    class: "flex gap-2",
                    button { r#type: "submit", class: "btn btn-primary", "Save" }
                    a { href: "/birds/{bird.id}/", class: "btn btn-ghost", "Cancel" }
                }
            }
        },
    )
}

fn bird_fields(breed: &str, description: &str, age: &str) -> Element {
    rsx! {
        {text_input("Breed", "breed", breed)}
        label {
            class: "form-control",
            span { class: "label-text", "Description" }
            textarea {
                name: "description",
                class: "textarea textarea-bordered",
                "{description}"
            }
        }
        label {
            class: "form-control",
            span { class: "label-text", "Age" }
            input {
                r#type: "number",
                name: "age",
                value: "{age}",
                class: "input input-bordered",
            }
        }
    }
}

pub(crate) fn text_input(label: &str, name: &str, value: &str) -> Element {
    rsx! {
        label {
            class: "form-control",
            span { class: "label-text", "{label}" }
            input {
                r#type: "text",
                name: "{name}",
                value: "{value}",
                class: "input input-bordered",
            }
        }
    }
}

pub fn confirm_delete(user: User, bird: Bird) -> Html<String> {
    render_page(
        "Delete Bird",
        Some(user),
        rsx! {
            h1 { class: "text-3xl font-bold mb-4", "Delete {bird.name}?" }
            p {
                class: "mb-6",
                "This also removes every feeding, photo and toy association recorded for {bird.name}."
            }
            form {
                method: "post",
                action: "/birds/{bird.id}/delete/",
                class: "flex gap-2",
                button { r#type: "submit", class: "btn btn-error", "Yes, delete" }
                a { href: "/birds/{bird.id}/", class: "btn btn-ghost", "Cancel" }
            }
        },
    )
}

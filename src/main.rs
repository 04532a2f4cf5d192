#![allow(non_snake_case)]
mod components;
mod controller;
mod pages;
mod utils;
mod web;
#[cfg(test)]
mod fixture;

use components::template::{Footer, Header};
use dioxus::{logger::tracing::error, prelude::*};
use pages::{about::About, article::ArticleView, articles::Articles, contact::Contact, home::Home, legal::{Privacy, Terms}};

const LUCIDE_CDN: &str = "https://unpkg.com/lucide@latest";

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    static CSS: Asset = asset!("/assets/main.css");

    rsx! {
        document::Stylesheet { href: CSS },
        document::Script { src: LUCIDE_CDN },
        div {
            class: "app",
            onmounted: move |_evt| {
                if let Err(e) = web::boot() {
                    error!("page controller failed to start: {}", e);
                }
            },
            Header { }
            main {
                class: "main",
                Home { }
                Articles { }
                About { }
                Contact { }
                Privacy { }
                Terms { }
                ArticleView { }
            }
            Footer { }
        }
    }
}

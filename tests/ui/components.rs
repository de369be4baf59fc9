#[path = "components/badge.rs"]
mod badge;

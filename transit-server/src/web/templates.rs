//! Askama templates for the web frontend.

use askama::Template;

/// Network map page embedding the rendered SVG.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub svg: String,
    pub bus_count: usize,
    pub stop_count: usize,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

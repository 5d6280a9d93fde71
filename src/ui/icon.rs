use leptos::prelude::*;

/// Font Awesome icon
#[component]
pub fn Icon(
    /// Icon classes, e.g. `"fas fa-robot"`
    name: &'static str,
    /// Extra CSS classes for sizing and colour
    #[prop(default = "")]
    class: &'static str,
    /// Inline style, used for per-item brand colours
    #[prop(optional, into)]
    style: Option<String>,
) -> impl IntoView {
    view! { <i class=format!("{} {}", name, class) style=style aria-hidden="true"></i> }
}

/// Icons used outside the static content tables
pub mod icons {
    pub const BARS: &str = "fas fa-bars";
    pub const ENVELOPE: &str = "fas fa-envelope";
    pub const PHONE: &str = "fas fa-phone";
    pub const MAP_MARKER: &str = "fas fa-map-marker-alt";
    pub const ARROW_RIGHT: &str = "fas fa-arrow-right";
    pub const COMPASS: &str = "fas fa-compass";
    pub const CHECK_CIRCLE: &str = "fas fa-check-circle";
    pub const ALERT_CIRCLE: &str = "fas fa-exclamation-circle";
    pub const SPINNER: &str = "fas fa-spinner fa-spin";
}

pub mod join;
pub mod not_found;

use dioxus::prelude::*;

use join::JoinPage;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    JoinPage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

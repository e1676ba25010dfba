//! Turns a page state and its window into renderable links.

use crate::models::display::{DisplayData, PageLabel, PageLink};
use crate::models::pagination::{query_separator, PageState, PAGE_PARAM};
use crate::services::window::{self, WindowEntry};

/// Url of `page` under `path`, e.g. `/catalog?page=3` or `/catalog?sort=asc&page=3`.
pub fn page_url(path: &str, page: i64) -> String {
    format!("{path}{}{PAGE_PARAM}={page}", query_separator(path))
}

/// Build the navigation links for `state`, showing up to `visible` concrete pages.
///
/// Returns the empty structure when the list fits on a single page or the
/// state is unconfigured.
pub fn display_data(state: &PageState, visible: i64) -> DisplayData {
    if !state.has_pages() {
        return DisplayData::default();
    }

    let path = state.path();
    let window = window::build(state.current(), state.pages(), visible);

    let pages = window
        .entries
        .iter()
        .map(|entry| match *entry {
            WindowEntry::Page(page) | WindowEntry::Last(page) => PageLink {
                url: page_url(path, page),
                label: PageLabel::Number(page),
            },
            WindowEntry::First => PageLink {
                url: page_url(path, 1),
                label: PageLabel::Number(1),
            },
            WindowEntry::Gap { target } => PageLink {
                url: page_url(path, target),
                label: PageLabel::Gap,
            },
        })
        .collect();

    DisplayData {
        prev_link: window.prev.map(|page| page_url(path, page)),
        next_link: window.next.map(|page| page_url(path, page)),
        active: state.current(),
        pages,
    }
}

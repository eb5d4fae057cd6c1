use yew::prelude::*;

use crate::config;

/// (href, label) for every page in the site navigation.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("index.html", "Home"),
    ("faq.html", "FAQ"),
];

/// File name of the loaded page, e.g. `/site/faq.html` -> `faq.html`.
pub fn current_page(pathname: &str) -> String {
    pathname
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(config::HOME_PAGE)
        .to_string()
}

pub fn is_active(href: &str, page: &str) -> bool {
    href == page
}

fn loaded_page() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|pathname| current_page(&pathname))
        .unwrap_or_else(|| config::HOME_PAGE.to_string())
}

#[derive(Properties, PartialEq)]
pub struct NavLinksProps {
    #[prop_or_default]
    pub on_navigate: Option<Callback<MouseEvent>>,
}

#[function_component(NavLinks)]
pub fn nav_links(props: &NavLinksProps) -> Html {
    // Classified once per page load
    let page = use_state(loaded_page);

    html! {
        <ul class="nav-list">
            { for NAV_LINKS.iter().map(|(href, label)| {
                let active = is_active(href, &page);
                html! {
                    <li>
                        <a
                            href={*href}
                            class={classes!("nav-link", active.then(|| "active"))}
                            aria-current={active.then(|| "page")}
                            onclick={props.on_navigate.clone()}
                        >
                            {*label}
                        </a>
                    </li>
                }
            }) }
        </ul>
    }
}

use yew::prelude::*;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

use crate::config;
use crate::components::language::{LanguagePair, LanguageSelect, Side};
use crate::components::menu::MobileMenu;
use crate::components::nav::NavLinks;

/// Header appearance derived from the vertical scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollState {
    #[default]
    Top,
    Scrolled,
}

impl ScrollState {
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ScrollState::Scrolled
        } else {
            ScrollState::Top
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            ScrollState::Scrolled => Some("scrolled"),
            ScrollState::Top => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    #[prop_or(config::SCROLL_THRESHOLD)]
    pub scroll_threshold: f64,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let scroll_state = use_state_eq(ScrollState::default);
    let languages = use_state_eq(LanguagePair::default);

    {
        let scroll_state = scroll_state.clone();
        use_effect_with_deps(move |threshold| {
            let threshold = *threshold;
            let registered = web_sys::window().map(|window| {
                // Page may be restored mid-scroll
                let offset = window.scroll_y().unwrap_or(0.0);
                scroll_state.set(ScrollState::from_offset(offset, threshold));

                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_clone.scroll_y().unwrap_or(0.0);
                    scroll_state.set(ScrollState::from_offset(offset, threshold));
                }) as Box<dyn FnMut()>);

                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                if window
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                        &options,
                    )
                    .is_err()
                {
                    warn!("could not attach header scroll listener");
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = registered {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, props.scroll_threshold);
    }

    let on_language = {
        let languages = languages.clone();
        Callback::from(move |(side, value): (Side, String)| {
            debug!("language changed on {:?} selector to {}", side, value);
            let mut next = (*languages).clone();
            next.change(side, &value);
            languages.set(next);
        })
    };

    html! {
        <header id="site-header" class={classes!("site-header", scroll_state.class())}>
            <div class="header-inner">
                <a href={config::HOME_PAGE} class="site-logo">
                    {"Omnæs Dæmones"}
                </a>

                <nav class="main-nav" aria-label="Main navigation">
                    <NavLinks />
                </nav>

                <LanguageSelect
                    side={Side::Desktop}
                    value={languages.value(Side::Desktop).to_string()}
                    on_change={on_language.clone()}
                />

                <MobileMenu
                    language={languages.value(Side::Mobile).to_string()}
                    on_language={on_language}
                />
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_up_to_threshold_stay_at_top() {
        for offset in [0.0, 1.0, 39.9, 40.0] {
            assert_eq!(ScrollState::from_offset(offset, 40.0), ScrollState::Top);
        }
        assert_eq!(ScrollState::Top.class(), None);
    }

    #[test]
    fn offsets_past_threshold_are_scrolled() {
        for offset in [40.01, 41.0, 600.0, 10_000.0] {
            assert_eq!(ScrollState::from_offset(offset, 40.0), ScrollState::Scrolled);
        }
        assert_eq!(ScrollState::Scrolled.class(), Some("scrolled"));
    }

    #[test]
    fn no_hysteresis_across_event_sequence() {
        let offsets = [0.0, 50.0, 41.0, 40.0, 39.0, 120.0, 40.0];
        let states: Vec<_> = offsets
            .iter()
            .map(|offset| ScrollState::from_offset(*offset, config::SCROLL_THRESHOLD))
            .collect();
        for (offset, state) in offsets.iter().zip(states) {
            assert_eq!(state == ScrollState::Scrolled, *offset > 40.0);
        }
    }
}

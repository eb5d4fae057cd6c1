use yew::prelude::*;
use yew_hooks::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, Node};

use crate::components::language::{LanguageSelect, Side};
use crate::components::nav::NavLinks;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    NavLinkClicked,
    Escape,
    OutsideClick,
}

/// Everything the button and panel show for one menu state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub open_class: Option<&'static str>,
    pub aria_expanded: bool,
    pub aria_hidden: bool,
    pub aria_label: &'static str,
    pub locks_page_scroll: bool,
}

impl MenuState {
    /// Next state for `event`, or `None` when the event changes nothing.
    pub fn apply(self, event: MenuEvent) -> Option<MenuState> {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => Some(MenuState::Open),
            (MenuState::Closed, _) => None,
            (MenuState::Open, _) => Some(MenuState::Closed),
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn view(self) -> MenuView {
        match self {
            MenuState::Open => MenuView {
                open_class: Some("open"),
                aria_expanded: true,
                aria_hidden: false,
                aria_label: "Close navigation menu",
                locks_page_scroll: true,
            },
            MenuState::Closed => MenuView {
                open_class: None,
                aria_expanded: false,
                aria_hidden: true,
                aria_label: "Open navigation menu",
                locks_page_scroll: false,
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub language: String,
    pub on_language: Callback<(Side, String)>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let menu = use_state_eq(MenuState::default);
    let button_ref = use_node_ref();
    let panel_ref = use_node_ref();

    let dispatch = {
        let menu = menu.clone();
        Callback::from(move |event: MenuEvent| -> bool {
            match menu.apply(event) {
                Some(next) => {
                    debug!("mobile menu {:?} -> {:?} on {:?}", *menu, next, event);
                    menu.set(next);
                    true
                }
                None => false,
            }
        })
    };

    {
        let dispatch = dispatch.clone();
        let button_ref = button_ref.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && dispatch.emit(MenuEvent::Escape) {
                if let Some(button) = button_ref.cast::<HtmlElement>() {
                    let _ = button.focus();
                }
            }
        });
    }

    {
        let dispatch = dispatch.clone();
        let button_ref = button_ref.clone();
        let panel_ref = panel_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |node_ref: &NodeRef| {
                node_ref
                    .get()
                    .map_or(false, |node| node.contains(target.as_ref()))
            };
            if !inside(&panel_ref) && !inside(&button_ref) {
                dispatch.emit(MenuEvent::OutsideClick);
            }
        });
    }

    // Background scroll lock follows the open state and is released on unmount
    use_effect_with_deps(move |state| {
        let body = state
            .view()
            .locks_page_scroll
            .then(|| web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()))
            .flatten();
        if let Some(body) = &body {
            let _ = body.style().set_property("overflow", "hidden");
        }
        move || {
            if let Some(body) = body {
                let _ = body.style().remove_property("overflow");
            }
        }
    }, *menu);

    let toggle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.emit(MenuEvent::Toggle);
        })
    };

    let close_on_navigate = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.emit(MenuEvent::NavLinkClicked);
        })
    };

    let view = menu.view();

    html! {
        <>
            <button
                id="mobile-menu-btn"
                ref={button_ref}
                class={classes!("mobile-menu-btn", view.open_class)}
                aria-controls="mobile-nav"
                aria-expanded={view.aria_expanded.to_string()}
                aria-label={view.aria_label}
                onclick={toggle}
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <div
                id="mobile-nav"
                ref={panel_ref}
                class={classes!("mobile-nav", view.open_class)}
                aria-hidden={view.aria_hidden.to_string()}
            >
                <NavLinks on_navigate={close_on_navigate} />
                <LanguageSelect
                    side={Side::Mobile}
                    value={props.language.clone()}
                    on_change={props.on_language.clone()}
                />
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENTS: [MenuEvent; 4] = [
        MenuEvent::Toggle,
        MenuEvent::NavLinkClicked,
        MenuEvent::Escape,
        MenuEvent::OutsideClick,
    ];

    fn step(state: MenuState, event: MenuEvent) -> MenuState {
        state.apply(event).unwrap_or(state)
    }

    #[test]
    fn toggle_flips_state() {
        assert_eq!(MenuState::Closed.apply(MenuEvent::Toggle), Some(MenuState::Open));
        assert_eq!(MenuState::Open.apply(MenuEvent::Toggle), Some(MenuState::Closed));
    }

    #[test]
    fn every_close_trigger_closes_an_open_menu() {
        for event in [MenuEvent::NavLinkClicked, MenuEvent::Escape, MenuEvent::OutsideClick] {
            assert_eq!(MenuState::Open.apply(event), Some(MenuState::Closed));
        }
    }

    #[test]
    fn close_triggers_on_closed_menu_are_noops() {
        for event in [MenuEvent::NavLinkClicked, MenuEvent::Escape, MenuEvent::OutsideClick] {
            assert_eq!(MenuState::Closed.apply(event), None);
        }
    }

    #[test]
    fn no_transition_targets_current_state() {
        for state in [MenuState::Closed, MenuState::Open] {
            for event in EVENTS {
                assert_ne!(state.apply(event), Some(state));
            }
        }
    }

    #[test]
    fn button_and_panel_stay_consistent_after_any_sequence() {
        let sequence = [
            MenuEvent::Toggle,
            MenuEvent::Escape,
            MenuEvent::Escape,
            MenuEvent::Toggle,
            MenuEvent::NavLinkClicked,
            MenuEvent::OutsideClick,
            MenuEvent::Toggle,
            MenuEvent::Toggle,
            MenuEvent::Toggle,
            MenuEvent::OutsideClick,
        ];
        let mut state = MenuState::default();
        for event in sequence {
            state = step(state, event);
            let view = state.view();
            assert_eq!(view.aria_expanded, !view.aria_hidden);
            assert_eq!(view.aria_expanded, state.is_open());
            assert_eq!(view.locks_page_scroll, state.is_open());
        }
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn label_describes_next_action() {
        assert_eq!(MenuState::Closed.view().aria_label, "Open navigation menu");
        assert_eq!(MenuState::Open.view().aria_label, "Close navigation menu");
        assert_eq!(MenuState::Open.view().open_class, Some("open"));
        assert_eq!(MenuState::Closed.view().open_class, None);
    }
}

use yew::prelude::*;
use log::debug;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Right,
}

impl Direction {
    fn transform(self, distance_px: u32) -> String {
        match self {
            Direction::Up => format!("translateY({}px)", distance_px),
            Direction::Left => format!("translateX(-{}px)", distance_px),
            Direction::Right => format!("translateX({}px)", distance_px),
        }
    }
}

/// Shared animation settings for one set of sibling elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealGroup {
    pub direction: Direction,
    pub distance_px: u32,
    pub threshold: f64,
    pub stagger_ms: u32,
    pub duration_ms: u32,
}

impl RevealGroup {
    pub fn cards() -> Self {
        Self {
            direction: Direction::Up,
            distance_px: 24,
            threshold: config::CARD_THRESHOLD,
            stagger_ms: config::CARD_STAGGER_MS,
            duration_ms: config::CARD_DURATION_MS,
        }
    }

    pub fn resources() -> Self {
        Self {
            direction: Direction::Left,
            distance_px: 16,
            threshold: config::CARD_THRESHOLD,
            stagger_ms: config::CARD_STAGGER_MS,
            duration_ms: config::RESOURCE_DURATION_MS,
        }
    }

    pub fn list(direction: Direction) -> Self {
        Self {
            direction,
            distance_px: 24,
            threshold: config::GROUP_THRESHOLD,
            stagger_ms: config::GROUP_STAGGER_MS,
            duration_ms: config::GROUP_DURATION_MS,
        }
    }

    pub fn delay_ms(&self, index: usize) -> u32 {
        (index as u32).saturating_mul(self.stagger_ms)
    }

    pub fn style(&self, state: RevealState, index: usize) -> String {
        let delay = self.delay_ms(index);
        let transition = format!(
            "opacity {d}ms ease {delay}ms, transform {d}ms ease {delay}ms",
            d = self.duration_ms,
        );
        match state {
            RevealState::Hidden => format!(
                "opacity: 0; transform: {}; transition: {};",
                self.direction.transform(self.distance_px),
                transition
            ),
            RevealState::Revealed => format!("opacity: 1; transform: none; transition: {};", transition),
        }
    }
}

/// Once `Revealed`, an element never goes back to `Hidden`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feeds one visibility report. Returns `true` only for the report that
    /// performs the reveal.
    pub fn observe(&mut self, ratio: f64, is_intersecting: bool, threshold: f64) -> bool {
        if *self == RevealState::Revealed {
            return false;
        }
        if is_intersecting && ratio >= threshold {
            *self = RevealState::Revealed;
            return true;
        }
        false
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            RevealState::Revealed => Some("revealed"),
            RevealState::Hidden => None,
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    threshold: f64,
    on_reveal: Callback<()>,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let mut state = RevealState::Hidden;
    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if state.observe(entry.intersection_ratio(), entry.is_intersecting(), threshold) {
                observer.unobserve(&entry.target());
                on_reveal.emit(());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok((observer, callback))
}

/// Tracks when the element behind `node` first becomes visible enough.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> RevealState {
    let state = use_state_eq(RevealState::default);

    {
        let state = state.clone();
        use_effect_with_deps(move |(node, threshold)| {
            let reveal = Callback::from(move |_| state.set(RevealState::Revealed));
            let observed = match node.cast::<Element>() {
                Some(element) => match observe_once(&element, *threshold, reveal.clone()) {
                    Ok(observed) => Some(observed),
                    Err(err) => {
                        debug!("visibility observer unavailable, showing immediately: {:?}", err);
                        reveal.emit(());
                        None
                    }
                },
                None => {
                    reveal.emit(());
                    None
                }
            };
            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        }, (node, threshold));
    }

    *state
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub group: RevealGroup,
    #[prop_or_default]
    pub index: usize,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone(), props.group.threshold);

    html! {
        <@{props.tag.to_string()}
            ref={node}
            class={classes!(props.class.clone(), state.class())}
            data-reveal=""
            style={props.group.style(state, props.index)}
        >
            { for props.children.iter() }
        </@>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroRevealProps {
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Above-the-fold content that reveals after a fixed delay regardless of
/// scroll position.
#[function_component(HeroReveal)]
pub fn hero_reveal(props: &HeroRevealProps) -> Html {
    let state = use_state_eq(RevealState::default);

    {
        let state = state.clone();
        use_effect_with_deps(move |delay_ms| {
            let timeout = Timeout::new(*delay_ms, move || state.set(RevealState::Revealed));
            move || drop(timeout)
        }, props.delay_ms);
    }

    html! {
        <div class={classes!(props.class.clone(), state.class())} data-reveal="">
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_below_threshold() {
        let mut state = RevealState::default();
        for ratio in [0.0, 0.01, 0.05, 0.1] {
            assert!(!state.observe(ratio, true, 0.12));
            assert_eq!(state, RevealState::Hidden);
        }
    }

    #[test]
    fn stays_hidden_just_under_threshold() {
        let mut state = RevealState::default();
        for ratio in [0.116, 0.119, 0.11999] {
            assert!(!state.observe(ratio, true, 0.12));
        }
        assert!(!state.observe(0.0999, true, config::GROUP_THRESHOLD));
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn ignores_reports_that_are_not_intersecting() {
        let mut state = RevealState::default();
        assert!(!state.observe(0.5, false, 0.12));
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn reveals_once_threshold_met() {
        let mut state = RevealState::default();
        assert!(state.observe(0.12, true, 0.12));
        assert_eq!(state, RevealState::Revealed);
        assert_eq!(state.class(), Some("revealed"));
    }

    #[test]
    fn reveal_is_monotonic_and_fires_once() {
        let mut state = RevealState::default();
        let reports = [(0.0, false), (0.3, true), (0.0, false), (1.0, true), (0.2, true)];
        let fired = reports
            .iter()
            .filter(|(ratio, intersecting)| state.observe(*ratio, *intersecting, 0.1))
            .count();
        assert_eq!(fired, 1);
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn stagger_grows_with_index() {
        let cards = RevealGroup::cards();
        assert_eq!(cards.delay_ms(0), 0);
        assert_eq!(cards.delay_ms(1), 100);
        assert_eq!(cards.delay_ms(4), 400);

        let list = RevealGroup::list(Direction::Up);
        assert_eq!(list.delay_ms(3), 240);
    }

    #[test]
    fn hidden_style_uses_group_direction() {
        let up = RevealGroup::list(Direction::Up).style(RevealState::Hidden, 0);
        assert!(up.contains("opacity: 0"));
        assert!(up.contains("translateY(24px)"));

        let left = RevealGroup::resources().style(RevealState::Hidden, 0);
        assert!(left.contains("translateX(-16px)"));

        let right = RevealGroup::list(Direction::Right).style(RevealState::Hidden, 2);
        assert!(right.contains("translateX(24px)"));
        assert!(right.contains("ease 160ms"));
    }

    #[test]
    fn every_group_ends_neutral() {
        for group in [
            RevealGroup::cards(),
            RevealGroup::resources(),
            RevealGroup::list(Direction::Left),
            RevealGroup::list(Direction::Right),
        ] {
            let style = group.style(RevealState::Revealed, 3);
            assert!(style.starts_with("opacity: 1; transform: none;"));
        }
    }
}

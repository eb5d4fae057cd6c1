use yew::prelude::*;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config;

/// Leading integer of a CSS length such as `76px` or ` 80`, the way the
/// browser's integer parse reads it. Anything else is `None`.
pub fn parse_css_length(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<f64>().ok().map(|value| sign * value)
}

pub fn header_offset(raw: &str, fallback: f64) -> f64 {
    parse_css_length(raw).unwrap_or(fallback)
}

/// Document position to scroll to so the target sits below the fixed header.
pub fn scroll_target(rect_top: f64, scroll_y: f64, header: f64, margin: f64) -> f64 {
    rect_top + scroll_y - header - margin
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// Element id, without the leading `#`.
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::HEADER_FALLBACK_HEIGHT)]
    pub fallback_header: f64,
    #[prop_or(config::ANCHOR_MARGIN)]
    pub margin: f64,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let id = props.target.clone();
        let fallback = props.fallback_header;
        let margin = props.margin;
        Callback::from(move |e: MouseEvent| {
            let Some(window) = web_sys::window() else { return };
            let Some(document) = window.document() else { return };
            let Some(target) = document.get_element_by_id(&id) else { return };
            e.prevent_default();

            let raw = document
                .document_element()
                .and_then(|root| window.get_computed_style(&root).ok().flatten())
                .and_then(|style| style.get_property_value(config::HEADER_HEIGHT_VAR).ok())
                .unwrap_or_default();
            let top = scroll_target(
                target.get_bounding_client_rect().top(),
                window.scroll_y().unwrap_or(0.0),
                header_offset(&raw, fallback),
                margin,
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })
    };

    html! {
        <a href={format!("#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_integer() {
        assert_eq!(parse_css_length("76px"), Some(76.0));
        assert_eq!(parse_css_length(" 80"), Some(80.0));
        assert_eq!(parse_css_length("64.5px"), Some(64.0));
        assert_eq!(parse_css_length("-4px"), Some(-4.0));
    }

    #[test]
    fn unparsable_values_are_none() {
        assert_eq!(parse_css_length(""), None);
        assert_eq!(parse_css_length("   "), None);
        assert_eq!(parse_css_length("auto"), None);
        assert_eq!(parse_css_length("px"), None);
    }

    #[test]
    fn header_offset_falls_back() {
        assert_eq!(header_offset("", config::HEADER_FALLBACK_HEIGHT), 76.0);
        assert_eq!(header_offset("calc(4rem)", 76.0), 76.0);
        assert_eq!(header_offset("90px", 76.0), 90.0);
    }

    #[test]
    fn target_accounts_for_header_and_margin() {
        // Target 500px below viewport top while scrolled 1000px down
        let top = scroll_target(500.0, 1000.0, 76.0, config::ANCHOR_MARGIN);
        assert_eq!(top, 1408.0);
    }
}

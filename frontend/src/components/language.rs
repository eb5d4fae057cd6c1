use yew::prelude::*;
use web_sys::HtmlSelectElement;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Desktop,
    Mobile,
}

impl Side {
    pub fn element_id(self) -> &'static str {
        match self {
            Side::Desktop => "lang-desktop",
            Side::Mobile => "lang-mobile",
        }
    }
}

/// Values of the two language selectors. Any change is mirrored so both
/// always hold the last value picked on either side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguagePair {
    desktop: String,
    mobile: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            desktop: config::DEFAULT_LANGUAGE.to_string(),
            mobile: config::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl LanguagePair {
    pub fn change(&mut self, side: Side, value: &str) {
        match side {
            Side::Desktop => {
                self.desktop = value.to_string();
                self.mobile = self.desktop.clone();
            }
            Side::Mobile => {
                self.mobile = value.to_string();
                self.desktop = self.mobile.clone();
            }
        }
    }

    pub fn value(&self, side: Side) -> &str {
        match side {
            Side::Desktop => &self.desktop,
            Side::Mobile => &self.mobile,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageSelectProps {
    pub side: Side,
    pub value: String,
    pub on_change: Callback<(Side, String)>,
}

#[function_component(LanguageSelect)]
pub fn language_select(props: &LanguageSelectProps) -> Html {
    let select_ref = use_node_ref();

    // Push the mirrored value into the live element; the selected attribute
    // alone does not move a select the user has already touched.
    {
        let select_ref = select_ref.clone();
        use_effect_with_deps(move |value| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                if select.value() != *value {
                    select.set_value(value);
                }
            }
            || ()
        }, props.value.clone());
    }

    let onchange = {
        let side = props.side;
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((side, select.value()));
        })
    };

    html! {
        <select
            id={props.side.element_id()}
            ref={select_ref}
            class="lang-select"
            aria-label="Select language"
            {onchange}
        >
            { for config::LANGUAGES.iter().map(|(value, label)| html! {
                <option value={*value} selected={props.value == *value}>{*label}</option>
            }) }
        </select>
    }
}

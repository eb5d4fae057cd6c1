use yew::prelude::*;
use log::debug;
use web_sys::{Element, MouseEvent};

use crate::components::reveal::{use_reveal, Direction, RevealGroup};

/// Which question is expanded. At most one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Opens `index` (closing any other), or closes it if it was the open one.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_entry(&self) -> Option<usize> {
        self.open
    }
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: Html,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: AttrValue,
    open: bool,
    on_toggle: Callback<usize>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let item_ref = use_node_ref();
    let answer_ref = use_node_ref();
    let answer_height = use_state_eq(|| 0);
    let group = RevealGroup::list(Direction::Up);
    let reveal = use_reveal(item_ref.clone(), group.threshold);

    // Measure after the open padding is applied so the full answer fits
    {
        let answer_ref = answer_ref.clone();
        let answer_height = answer_height.clone();
        use_effect_with_deps(move |open| {
            if *open {
                if let Some(answer) = answer_ref.cast::<Element>() {
                    answer_height.set(answer.scroll_height());
                }
            }
            || ()
        }, props.open);
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    let answer_style = if props.open {
        format!("max-height: {}px; padding: 1.2rem 1.5rem;", *answer_height)
    } else {
        "max-height: 0; padding: 0 1.5rem;".to_string()
    };

    html! {
        <div
            ref={item_ref}
            class={classes!("faq-item", props.open.then_some("open"), reveal.class())}
            style={group.style(reveal, props.index)}
        >
            <button
                class="faq-question"
                aria-expanded={props.open.to_string()}
                onclick={toggle}
            >
                <span class="question-text">{props.question.as_str()}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div ref={answer_ref} class="faq-answer" style={answer_style}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let accordion = use_state_eq(Accordion::default);

    let on_toggle = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| {
            let mut next = *accordion;
            next.toggle(index);
            debug!("faq entry {} clicked, open entry now {:?}", index, next.open_entry());
            accordion.set(next);
        })
    };

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                <FaqItem
                    key={index}
                    {index}
                    question={entry.question.clone()}
                    open={accordion.is_open(index)}
                    on_toggle={on_toggle.clone()}
                >
                    { entry.answer.clone() }
                </FaqItem>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_everything_closed() {
        let accordion = Accordion::default();
        assert_eq!(accordion.open_entry(), None);
        assert!((0..5).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn opening_b_closes_a() {
        let mut accordion = Accordion::default();
        accordion.toggle(0);
        assert!(accordion.is_open(0));

        accordion.toggle(2);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
    }

    #[test]
    fn clicking_open_entry_closes_it() {
        let mut accordion = Accordion::default();
        accordion.toggle(1);
        accordion.toggle(1);
        assert_eq!(accordion.open_entry(), None);
    }

    #[test]
    fn never_two_open() {
        let mut accordion = Accordion::default();
        for index in [3, 1, 1, 4, 0, 0, 2, 3] {
            accordion.toggle(index);
            let open = (0..5).filter(|i| accordion.is_open(*i)).count();
            assert!(open <= 1);
        }
    }
}

use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::faq::{FaqEntry, FaqList};

fn entry(question: &'static str, answer: Html) -> FaqEntry {
    FaqEntry {
        question: AttrValue::Static(question),
        answer,
    }
}

fn entries() -> Vec<FaqEntry> {
    vec![
        entry("Do I need any musical training to join?", html! {
            <p>{"No. Open Studio and most classes start from listening and breathing. Bring curiosity; instruments are available to borrow."}</p>
        }),
        entry("How much do classes cost?", html! {
            <>
                <p>{"Each class runs in six-week blocks. Pay what you can; the suggested contribution is listed on the class card."}</p>
                <p>{"Nobody is turned away for lack of funds."}</p>
            </>
        }),
        entry("Are performances accessible?", html! {
            <p>{"All current venues have step-free access. Some pieces use strobe or low light; these are marked in the programme."}</p>
        }),
        entry("How do I apply for a residency?", html! {
            <>
                <p>{"Send a short description of the work you want to develop and two samples of previous work. Calls open twice a year."}</p>
                <p>
                    {"The easiest way to hear about the next call is the "}
                    <AnchorLink target="faq-newsletter">{"newsletter"}</AnchorLink>
                    {"."}
                </p>
            </>
        }),
        entry("Can I use recordings from the archive?", html! {
            <p>{"Yes. Archive material is released under a Creative Commons attribution licence unless stated otherwise."}</p>
        }),
    ]
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Classes, performances, residencies and the archive."}</p>
            </section>

            <section class="faq-section">
                <FaqList entries={entries()} />
            </section>

            <section id="faq-newsletter" class="faq-contact">
                <h2>{"Still curious?"}</h2>
                <p>
                    {"Sign up on the "}
                    <a href="index.html#newsletter">{"home page"}</a>
                    {" and we will write back with every new season."}
                </p>
            </section>

            <style>
                {r#"
                .faq-page {
                    padding-top: var(--header-h, 76px);
                    min-height: 100vh;
                }
                .faq-hero {
                    text-align: center;
                    padding: 4rem 1.5rem 2rem;
                }
                .faq-section {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 0 1.5rem 4rem;
                }
                .faq-item {
                    border: 1px solid var(--line);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.2rem 1.5rem;
                    background: none;
                    border: none;
                    color: inherit;
                    font: inherit;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    overflow: hidden;
                    transition: max-height 0.35s ease, padding 0.35s ease;
                }
                .faq-item.open .toggle-icon {
                    color: var(--accent);
                }
                .faq-contact {
                    text-align: center;
                    padding: 2rem 1.5rem 5rem;
                }
                "#}
            </style>
        </div>
    }
}

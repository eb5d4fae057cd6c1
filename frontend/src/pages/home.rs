use yew::prelude::*;

use crate::config;
use crate::components::anchor::AnchorLink;
use crate::components::newsletter::NewsletterForm;
use crate::components::reveal::{Direction, HeroReveal, Reveal, RevealGroup};

const FEATURES: &[(&str, &str)] = &[
    ("Live Rituals", "Evening performances mixing choral drones, percussion and projected light."),
    ("Open Studio", "Drop-in sessions where anyone can bring an instrument, a voice or a sketchbook."),
    ("Archive", "Recordings, scores and notes from every season, free to browse and reuse."),
    ("Residencies", "Two-week stays for artists working on sound, movement or text."),
];

const STATS: &[(&str, &str)] = &[
    ("12", "seasons"),
    ("340+", "performances"),
    ("58", "resident artists"),
    ("9", "cities"),
];

const RESOURCES: &[(&str, &str)] = &[
    ("https://archive.org/details/audio", "Open audio archive"),
    ("https://imslp.org", "Public domain scores"),
    ("https://freesound.org", "Field recordings library"),
];

const NEWS: &[(&str, &str, &str)] = &[
    ("March", "Spring season announced", "Six new works premiere across three venues this spring."),
    ("February", "Residency call open", "Applications for the summer residency close at the end of April."),
    ("January", "Archive update", "Forty recordings from the 2019 tour are now online."),
];

const MEDIA: &[(&str, &str)] = &[
    ("/assets/media/nocturne.jpg", "Nocturne for Twelve Voices"),
    ("/assets/media/procession.jpg", "Procession, harbour edition"),
    ("/assets/media/studio.jpg", "Open Studio, winter session"),
];

const CLASSES: &[(&str, &str, &str)] = &[
    ("Voice & Drone", "Mondays", "Breath, overtone singing and long-form listening."),
    ("Frame Drum", "Wednesdays", "Rhythm cycles from hand percussion traditions."),
    ("Light & Shadow", "Saturdays", "Building simple projection pieces for live work."),
];

const SOCIALS: &[(&str, &str)] = &[
    ("https://www.instagram.com/", "Instagram"),
    ("https://www.youtube.com/", "YouTube"),
    ("https://bandcamp.com/", "Bandcamp"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let list = RevealGroup::list(Direction::Up);

    html! {
        <div class="home-page">
            <section class="hero">
                <HeroReveal delay_ms={config::HERO_ART_DELAY_MS} class="hero-logo-art">
                    <img src="/assets/logo-art.svg" alt="Omnæs Dæmones emblem" />
                </HeroReveal>
                <HeroReveal delay_ms={config::HERO_CONTENT_DELAY_MS} class="hero-content">
                    <h1>{"Omnæs Dæmones"}</h1>
                    <p class="hero-subtitle">
                        {"A collective for sound, ritual and light."}
                    </p>
                    <div class="hero-actions">
                        <AnchorLink target="features" class="btn btn-primary">
                            {"Discover"}
                        </AnchorLink>
                        <AnchorLink target="newsletter" class="btn btn-ghost">
                            {"Join the newsletter"}
                        </AnchorLink>
                    </div>
                </HeroReveal>
            </section>

            <section id="features" class="features">
                <h2>{"What we do"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(i, (title, text))| html! {
                        <Reveal group={RevealGroup::cards()} index={i} class="feature-card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="stats">
                <ul class="stat-list">
                    { for STATS.iter().enumerate().map(|(i, (value, label))| html! {
                        <Reveal group={list} index={i} tag="li">
                            <strong>{*value}</strong>
                            <span>{*label}</span>
                        </Reveal>
                    }) }
                </ul>
            </section>

            <section id="resources" class="resources">
                <h2>{"Resources"}</h2>
                <ul class="resource-list">
                    { for RESOURCES.iter().enumerate().map(|(i, (href, label))| html! {
                        <Reveal group={RevealGroup::resources()} index={i} tag="li">
                            <a href={*href} class="resource-link" target="_blank" rel="noopener noreferrer">
                                {*label}
                            </a>
                        </Reveal>
                    }) }
                </ul>
            </section>

            <section id="news" class="news">
                <h2>{"News"}</h2>
                <div class="news-grid">
                    { for NEWS.iter().enumerate().map(|(i, (when, title, text))| html! {
                        <Reveal group={list} index={i} tag="article" class="news-card">
                            <span class="news-date">{*when}</span>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="media" class="media">
                <h2>{"Media"}</h2>
                <div class="media-grid">
                    { for MEDIA.iter().enumerate().map(|(i, (src, caption))| html! {
                        <Reveal group={RevealGroup::list(Direction::Right)} index={i} tag="figure" class="media-item">
                            <img src={*src} alt={*caption} loading="lazy" />
                            <figcaption>{*caption}</figcaption>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="classes" class="classes">
                <h2>{"Classes"}</h2>
                <div class="class-grid">
                    { for CLASSES.iter().enumerate().map(|(i, (name, day, text))| html! {
                        <Reveal group={list} index={i} class="class-card">
                            <h3>{*name}</h3>
                            <span class="class-day">{*day}</span>
                            <p>{*text}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="follow" class="socials">
                <h2>{"Follow us"}</h2>
                <div class="social-grid">
                    { for SOCIALS.iter().enumerate().map(|(i, (href, name))| html! {
                        <Reveal group={list} index={i} class="social-card">
                            <a href={*href} target="_blank" rel="noopener noreferrer">{*name}</a>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="newsletter" class="newsletter">
                <h2>{"Newsletter"}</h2>
                <p>{"Season announcements and the occasional field recording. No spam."}</p>
                <NewsletterForm />
            </section>
        </div>
    }
}

use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::faq_item::FaqItem;
use crate::components::marquee::Marquee;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{anchor, SectionHeading, SiteContent};
use crate::motion::marquee::{looped, Direction};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: Rc<SiteContent>,
}

#[derive(Properties, PartialEq)]
struct HeadingProps {
    heading: SectionHeading,
}

#[function_component(SectionHeader)]
fn section_header(props: &HeadingProps) -> Html {
    let h = &props.heading;
    html! {
        <>
            <div class="section-label">
                <span class="section-number">{&h.number}</span>
                <span class="section-name">{&h.label}</span>
                <div class="section-rule"></div>
            </div>
            <Reveal>
                <h2 class="section-title">
                    {&h.lead}{" "}<em>{&h.accent}</em>{" "}{&h.tail}
                </h2>
            </Reveal>
        </>
    }
}

fn external_link(href: &str, class: &'static str, label: &str) -> Html {
    html! {
        <a href={href.to_string()} target="_blank" rel="noreferrer" class={class}>
            {label.to_string()}
        </a>
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = &props.content;
    let rows = use_memo(|content: &Rc<SiteContent>| {
        let (first, second) = content.testimonial_rows();
        (Rc::new(first), Rc::new(second))
    }, content.clone());
    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            // Hero Section
            <section class="hero">
                <div class="hero-glow"></div>
                <div class="hero-badge">
                    <span class="pulse-dot"></span>
                    {&content.hero.badge}
                </div>
                <p class="hero-eyebrow">{&content.hero.eyebrow}</p>
                <h1>
                    {&content.hero.title_lead}{" "}
                    <em>{&content.hero.title_accent}</em>
                    <br/>{&content.hero.title_tail}
                </h1>
                <p class="hero-subtitle">{&content.hero.subtitle}</p>
                <div class="hero-actions">
                    { external_link(config::BOOKING_URL, "btn-primary", &content.hero.primary_cta) }
                    <a href="#process" class="btn-ghost">{&content.hero.secondary_cta}</a>
                </div>
                <div class="scroll-hint">
                    <div class="scroll-line"></div>
                    <span>{"Scroll"}</span>
                </div>
            </section>

            // Keyword ticker, a CSS loop over a doubled list
            <div class="ticker">
                <div class="ticker-track">
                    { for looped(&content.ticker, 2).into_iter().enumerate().map(|(i, word)| html! {
                        <div key={i} class="ticker-item">
                            {word}
                            <span class="ticker-dot"></span>
                        </div>
                    }) }
                </div>
            </div>

            // Stats
            <div class="stats-bar">
                { for content.stats.iter().map(|s| html! {
                    <div class="stat">
                        <div class="stat-value">
                            <Counter
                                target={s.target}
                                prefix={AttrValue::from(s.prefix.clone())}
                                suffix={AttrValue::from(s.suffix.clone())}
                            />
                        </div>
                        <div class="stat-label">{&s.label}</div>
                    </div>
                }) }
            </div>

            // Process
            <section id="process" class="section section-alt">
                <SectionHeader heading={content.sections.process.clone()} />
                <div class="process-grid">
                    { for content.process.iter().enumerate().map(|(i, step)| html! {
                        <Reveal delay_ms={i as u32 * 80}>
                            <div class="process-card">
                                <div class="proc-num">{&step.number}</div>
                                <h3>{&step.title}</h3>
                                <p>{&step.body}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            // Services
            <section id="services" class="section">
                <SectionHeader heading={content.sections.services.clone()} />
                <div class="services-grid">
                    { for content.services.iter().enumerate().map(|(i, service)| html! {
                        <Reveal delay_ms={i as u32 * 60}>
                            <div class="service-card">
                                <div class="svc-icon">{&service.icon}</div>
                                <h3>{&service.title}</h3>
                                <p>{&service.body}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            // Testimonials
            <section id="results" class="section section-alt">
                <SectionHeader heading={content.sections.results.clone()} />
                <Reveal>
                    <Marquee items={rows.0.clone()} direction={Direction::Forward} />
                    <Marquee items={rows.1.clone()} direction={Direction::Reverse} />
                </Reveal>
            </section>

            // Pricing
            <section id="pricing" class="section">
                <SectionHeader heading={content.sections.pricing.clone()} />
                <div class="pricing-grid">
                    { for content.pricing.iter().enumerate().map(|(i, tier)| html! {
                        <Reveal delay_ms={i as u32 * 80}>
                            <div class={classes!("pricing-card", tier.featured.then_some("featured"))}>
                                {
                                    if tier.featured {
                                        html! { <div class="pricing-badge">{"Most Popular"}</div> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <h3>{&tier.name}</h3>
                                <div class="pricing-price">
                                    {&tier.price}
                                    <span class="pricing-cadence">{&tier.cadence}</span>
                                </div>
                                <p class="pricing-blurb">{&tier.blurb}</p>
                                <ul>
                                    { for tier.features.iter().map(|f| html! { <li>{f}</li> }) }
                                </ul>
                                { external_link(
                                    config::BOOKING_URL,
                                    if tier.featured { "btn-primary" } else { "btn-ghost" },
                                    "Book a Call",
                                ) }
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            // FAQ
            <section id="faq" class="section">
                <SectionHeader heading={content.sections.faq.clone()} />
                <div class="faq-list">
                    { for content.faqs.iter().map(|faq| html! {
                        <FaqItem
                            question={AttrValue::from(faq.question.clone())}
                            answer={AttrValue::from(faq.answer.clone())}
                        />
                    }) }
                </div>
            </section>

            // Closing call to action
            <section class="closing-cta">
                <div class="closing-glow"></div>
                <Reveal>
                    <h2>
                        {&content.cta.lead}{" "}<em>{&content.cta.accent}</em>
                        <br/>{&content.cta.tail}
                    </h2>
                    <p>{&content.cta.body}</p>
                    { external_link(config::STRATEGY_CALL_URL, "btn-primary btn-large", &content.cta.button) }
                </Reveal>
            </section>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div>
                        <span class="footer-brand">
                            {config::BRAND}{" "}<span class="accent">{config::BRAND_ACCENT}</span>
                        </span>
                        <p class="footer-blurb">{&content.footer.blurb}</p>
                    </div>
                    <div>
                        <h4>{"Navigation"}</h4>
                        { for content.nav.iter().map(|label| html! {
                            <a href={anchor(label)} class="footer-link">{label}</a>
                        }) }
                    </div>
                    <div>
                        <h4>{"Services"}</h4>
                        { for content.footer.services.iter().map(|s| html! {
                            <span class="footer-link static">{s}</span>
                        }) }
                    </div>
                    <div>
                        <h4>{"Contact"}</h4>
                        <a href={config::tel_link()} class="footer-link">{config::CONTACT_PHONE_DISPLAY}</a>
                        <a href={config::mailto_link()} class="footer-link">{config::CONTACT_EMAIL}</a>
                        { external_link(config::BOOKING_URL, "footer-link", "Book a Call ↗") }
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {} {}. All rights reserved.", year, config::BRAND, config::BRAND_ACCENT)}</p>
                    <p class="footer-tagline">{&content.footer.tagline}</p>
                </div>
            </footer>

            <style>{ LANDING_CSS }</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --bg: #09090a;
        --bg-card: #111112;
        --bg-card2: #181819;
        --text: #f0ece2;
        --text-muted: #7a7670;
        --text-subtle: #4a4845;
        --gold: #c9a96e;
        --gold-light: #e8d9b8;
        --gold-dim: #6e5c3a;
        --border: #222220;
        --border-light: #2e2d2a;
    }

    html {
        scroll-behavior: smooth;
    }

    body {
        margin: 0;
        background: var(--bg);
        color: var(--text);
        font-family: 'Satoshi', sans-serif;
        font-weight: 300;
        line-height: 1.7;
        overflow-x: hidden;
    }

    .landing-page em {
        font-style: italic;
        color: var(--gold);
    }

    .reveal {
        opacity: 0;
        transform: translateY(32px);
        transition: opacity 0.7s ease, transform 0.7s ease;
    }

    .reveal.visible {
        opacity: 1;
        transform: translateY(0);
    }

    @keyframes pulse-green {
        0%, 100% { box-shadow: 0 0 0 0 rgba(74, 222, 128, 0.5); }
        50% { box-shadow: 0 0 0 7px rgba(74, 222, 128, 0); }
    }

    @keyframes grow-line {
        0%, 100% { transform: scaleY(0.5); opacity: 0.4; }
        50% { transform: scaleY(1); opacity: 1; }
    }

    @keyframes ticker {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }

    .hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 140px 5% 80px;
        position: relative;
        overflow: hidden;
        box-sizing: border-box;
    }

    .hero-glow {
        position: absolute;
        width: 600px;
        height: 600px;
        background: radial-gradient(circle, rgba(201, 169, 110, 0.06) 0%, transparent 70%);
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%);
        pointer-events: none;
    }

    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        border: 1px solid var(--border-light);
        padding: 8px 18px;
        font-size: 0.75rem;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        color: var(--text-muted);
        margin-bottom: 48px;
    }

    .pulse-dot {
        width: 6px;
        height: 6px;
        background: #4ade80;
        border-radius: 50%;
        animation: pulse-green 2s infinite;
    }

    .hero-eyebrow {
        font-size: 0.72rem;
        letter-spacing: 0.25em;
        text-transform: uppercase;
        color: var(--gold);
        margin-bottom: 24px;
    }

    .hero h1 {
        font-family: 'Cormorant Garamond', serif;
        font-size: clamp(3rem, 7vw, 6.5rem);
        font-weight: 300;
        line-height: 1.05;
        max-width: 900px;
        margin: 0 0 32px;
    }

    .hero-subtitle {
        font-size: 1rem;
        color: var(--text-muted);
        max-width: 520px;
        margin-bottom: 52px;
        line-height: 1.8;
    }

    .hero-actions {
        display: flex;
        gap: 16px;
        justify-content: center;
        flex-wrap: wrap;
    }

    .scroll-hint {
        position: absolute;
        bottom: 40px;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 8px;
        color: var(--text-subtle);
        font-size: 0.7rem;
        letter-spacing: 0.15em;
        text-transform: uppercase;
    }

    .scroll-line {
        width: 1px;
        height: 48px;
        background: linear-gradient(to bottom, var(--gold-dim), transparent);
        animation: grow-line 2s ease infinite;
    }

    .btn-primary {
        background: var(--gold);
        color: var(--bg);
        padding: 16px 36px;
        font-size: 0.82rem;
        font-weight: 500;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        text-decoration: none;
        transition: background 0.3s;
        display: inline-block;
    }

    .btn-primary:hover {
        background: var(--gold-light);
    }

    .btn-large {
        font-size: 0.9rem;
        padding: 18px 48px;
    }

    .btn-ghost {
        border: 1px solid var(--border-light);
        color: var(--text-muted);
        padding: 16px 36px;
        font-size: 0.82rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        text-decoration: none;
        transition: all 0.3s;
        display: inline-block;
    }

    .btn-ghost:hover {
        border-color: var(--gold);
        color: var(--gold);
    }

    .ticker {
        border-top: 1px solid var(--border);
        border-bottom: 1px solid var(--border);
        padding: 32px 0;
        overflow: hidden;
    }

    .ticker-track {
        display: flex;
        width: max-content;
        animation: ticker 28s linear infinite;
    }

    .ticker-item {
        display: flex;
        align-items: center;
        gap: 20px;
        padding: 0 48px;
        white-space: nowrap;
        font-size: 0.75rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: var(--text-subtle);
    }

    .ticker-dot {
        width: 4px;
        height: 4px;
        background: var(--gold-dim);
        border-radius: 50%;
    }

    .stats-bar {
        border-bottom: 1px solid var(--border);
        padding: 60px 5%;
        display: grid;
        grid-template-columns: repeat(4, 1fr);
    }

    .stat {
        padding: 0 40px;
        border-right: 1px solid var(--border);
        text-align: center;
    }

    .stat:last-child {
        border-right: none;
    }

    .stat-value {
        font-family: 'Cormorant Garamond', serif;
        font-size: clamp(2.5rem, 4vw, 4rem);
        font-weight: 300;
        color: var(--gold);
        line-height: 1;
        margin-bottom: 8px;
    }

    .stat-label {
        font-size: 0.75rem;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        color: var(--text-muted);
    }

    .section {
        padding: 120px 5%;
    }

    .section-alt {
        background: var(--bg-card);
    }

    .section-label {
        display: flex;
        align-items: center;
        gap: 16px;
        margin-bottom: 64px;
        font-size: 0.7rem;
        letter-spacing: 0.2em;
    }

    .section-number {
        color: var(--gold);
    }

    .section-name {
        text-transform: uppercase;
        color: var(--text-subtle);
    }

    .section-rule {
        flex: 1;
        height: 1px;
        background: var(--border);
    }

    .section-title {
        font-family: 'Cormorant Garamond', serif;
        font-size: clamp(2.5rem, 5vw, 4.5rem);
        font-weight: 300;
        line-height: 1.1;
        max-width: 700px;
        margin: 0 0 80px;
    }

    .process-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1px;
        background: var(--border);
        border: 1px solid var(--border);
    }

    .process-card {
        background: var(--bg-card);
        padding: 56px 48px;
        position: relative;
        overflow: hidden;
        transition: background 0.4s;
        height: 100%;
        box-sizing: border-box;
    }

    .process-card::before {
        content: '';
        position: absolute;
        top: 0;
        left: 0;
        right: 0;
        height: 2px;
        background: var(--gold);
        transform: scaleX(0);
        transform-origin: left;
        transition: transform 0.4s ease;
    }

    .process-card:hover {
        background: var(--bg-card2);
    }

    .process-card:hover::before {
        transform: scaleX(1);
    }

    .proc-num {
        font-family: 'Cormorant Garamond', serif;
        font-size: 4rem;
        font-weight: 300;
        color: var(--text-subtle);
        line-height: 1;
        margin-bottom: 32px;
        transition: color 0.4s;
    }

    .process-card:hover .proc-num {
        color: var(--gold-dim);
    }

    .process-card h3,
    .service-card h3,
    .pricing-card h3 {
        font-family: 'Cormorant Garamond', serif;
        font-weight: 400;
        font-size: 1.5rem;
        margin: 0 0 14px;
    }

    .process-card p,
    .service-card p {
        font-size: 0.9rem;
        color: var(--text-muted);
        line-height: 1.8;
        max-width: 340px;
    }

    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 24px;
    }

    .service-card {
        border: 1px solid var(--border);
        padding: 44px 36px;
        transition: border-color 0.4s;
    }

    .service-card:hover {
        border-color: var(--gold-dim);
    }

    .svc-icon {
        width: 48px;
        height: 48px;
        border: 1px solid var(--border-light);
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 28px;
        font-size: 1.2rem;
        color: var(--gold);
        transition: border-color 0.4s, background 0.4s;
    }

    .service-card:hover .svc-icon {
        border-color: var(--gold);
        background: rgba(201, 169, 110, 0.05);
    }

    .marquee {
        overflow: hidden;
        margin-bottom: 20px;
        mask-image: linear-gradient(90deg, transparent, #000 8%, #000 92%, transparent);
    }

    .marquee-track {
        display: flex;
        width: max-content;
        cursor: grab;
        touch-action: pan-y;
        user-select: none;
        will-change: transform;
    }

    .marquee-track:active {
        cursor: grabbing;
    }

    .t-card {
        width: 360px;
        flex-shrink: 0;
        margin-right: 20px;
        background: var(--bg);
        border: 1px solid var(--border);
        padding: 36px 32px;
        box-sizing: border-box;
        transition: border-color 0.4s;
    }

    .t-card:hover {
        border-color: var(--gold-dim);
    }

    .t-tag {
        display: inline-block;
        background: rgba(201, 169, 110, 0.08);
        border: 1px solid rgba(201, 169, 110, 0.2);
        color: var(--gold);
        font-size: 0.7rem;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        padding: 4px 10px;
        margin-bottom: 16px;
    }

    .t-quote {
        font-family: 'Cormorant Garamond', serif;
        font-size: 1.15rem;
        font-style: italic;
        line-height: 1.6;
        margin-bottom: 28px;
        white-space: normal;
    }

    .t-author {
        display: flex;
        align-items: center;
        gap: 12px;
    }

    .t-initials {
        width: 40px;
        height: 40px;
        border-radius: 50%;
        background: var(--border-light);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 0.75rem;
        color: var(--gold);
        font-weight: 500;
    }

    .t-name {
        font-size: 0.85rem;
        font-weight: 500;
    }

    .t-company {
        font-size: 0.75rem;
        color: var(--text-subtle);
    }

    .pricing-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 24px;
        align-items: stretch;
    }

    .pricing-card {
        position: relative;
        border: 1px solid var(--border);
        padding: 48px 36px;
        display: flex;
        flex-direction: column;
        height: 100%;
        box-sizing: border-box;
    }

    .pricing-card.featured {
        border-color: var(--gold-dim);
        background: var(--bg-card);
    }

    .pricing-badge {
        position: absolute;
        top: -12px;
        left: 36px;
        background: var(--gold);
        color: var(--bg);
        font-size: 0.65rem;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        padding: 4px 12px;
    }

    .pricing-price {
        font-family: 'Cormorant Garamond', serif;
        font-size: 2.8rem;
        color: var(--gold);
        line-height: 1;
        margin-bottom: 16px;
    }

    .pricing-cadence {
        font-family: 'Satoshi', sans-serif;
        font-size: 0.8rem;
        color: var(--text-muted);
        margin-left: 6px;
    }

    .pricing-blurb {
        font-size: 0.88rem;
        color: var(--text-muted);
    }

    .pricing-card ul {
        list-style: none;
        padding: 0;
        margin: 0 0 36px;
        flex: 1;
    }

    .pricing-card li {
        font-size: 0.88rem;
        padding: 10px 0;
        border-bottom: 1px solid var(--border);
    }

    .pricing-card li::before {
        content: '—';
        color: var(--gold-dim);
        margin-right: 10px;
    }

    .faq-list {
        max-width: 760px;
    }

    .faq-item {
        border-bottom: 1px solid var(--border);
    }

    .faq-question {
        width: 100%;
        background: none;
        border: none;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 28px 0;
        cursor: pointer;
        text-align: left;
        color: var(--text);
        font-family: inherit;
        font-size: 1rem;
        gap: 20px;
    }

    .toggle-icon {
        width: 28px;
        height: 28px;
        border: 1px solid var(--border-light);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.2rem;
        color: var(--text-subtle);
        flex-shrink: 0;
        transition: all 0.3s;
    }

    .faq-item.open .toggle-icon {
        border-color: var(--gold);
        color: var(--gold);
        transform: rotate(45deg);
    }

    .faq-answer p {
        margin: 0;
        padding-bottom: 28px;
        font-size: 0.92rem;
        color: var(--text-muted);
        line-height: 1.8;
    }

    .closing-cta {
        padding: 140px 5%;
        text-align: center;
        position: relative;
        overflow: hidden;
        border-top: 1px solid var(--border);
    }

    .closing-glow {
        position: absolute;
        width: 800px;
        height: 400px;
        background: radial-gradient(ellipse, rgba(201, 169, 110, 0.05) 0%, transparent 70%);
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%);
        pointer-events: none;
    }

    .closing-cta h2 {
        font-family: 'Cormorant Garamond', serif;
        font-size: clamp(2.5rem, 6vw, 5.5rem);
        font-weight: 300;
        line-height: 1.1;
        max-width: 800px;
        margin: 0 auto 24px;
    }

    .closing-cta p {
        color: var(--text-muted);
        font-size: 0.95rem;
        max-width: 480px;
        margin: 0 auto 52px;
        line-height: 1.8;
    }

    .site-footer {
        border-top: 1px solid var(--border);
        padding: 72px 5% 0;
    }

    .footer-grid {
        display: grid;
        grid-template-columns: 1.5fr 1fr 1fr 1fr;
        gap: 48px;
        padding-bottom: 48px;
    }

    .footer-brand {
        font-family: 'Cormorant Garamond', serif;
        font-size: 1.4rem;
        display: block;
        margin-bottom: 16px;
    }

    .footer-brand .accent {
        color: var(--gold);
    }

    .footer-blurb {
        font-size: 0.85rem;
        color: var(--text-subtle);
        line-height: 1.8;
        max-width: 260px;
    }

    .site-footer h4 {
        font-size: 0.7rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: var(--gold);
        margin: 0 0 20px;
    }

    .footer-link {
        font-size: 0.85rem;
        color: var(--text-muted);
        text-decoration: none;
        transition: color 0.3s;
        display: block;
        margin-bottom: 10px;
    }

    .footer-link:hover {
        color: var(--text);
    }

    .footer-link.static {
        cursor: default;
    }

    .footer-bottom {
        border-top: 1px solid var(--border);
        padding: 24px 0;
        display: flex;
        align-items: center;
        justify-content: space-between;
        font-size: 0.78rem;
        color: var(--text-subtle);
    }

    .footer-tagline {
        font-size: 0.72rem;
        letter-spacing: 0.08em;
    }

    @media (max-width: 768px) {
        .process-grid,
        .services-grid,
        .pricing-grid {
            grid-template-columns: 1fr;
        }

        .stats-bar {
            grid-template-columns: repeat(2, 1fr);
            row-gap: 40px;
        }

        .stat {
            border-right: none;
        }

        .footer-grid {
            grid-template-columns: 1fr 1fr;
        }

        .t-card {
            width: 300px;
        }

        .hero h1 {
            font-size: clamp(2.4rem, 8vw, 4rem);
        }
    }
"#;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::cards::{FeatureCard, PlanCard, TestimonialCard};
use crate::components::nav::NavBar;
use crate::components::reveal_section::RevealSection;
use crate::config;
use crate::content::{FEATURES, PLANS, SOCIAL_LINKS, TESTIMONIALS};
use crate::sections::SectionId;
use crate::state::menu::{select_section, MenuState};
use crate::state::reveal::{load_reveal_css, menu_enter_css, menu_exit_css};
use crate::utils::date::{copyright_line, current_year};
use crate::utils::scroll::DomViewport;

const LANDING_CSS: &str = r#"
    .landing-page {
        font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
        color: #111827;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        background: #fff;
        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
        z-index: 50;
    }
    .nav-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        font-size: 1.5rem;
        font-weight: 700;
        color: #2563eb;
        cursor: pointer;
        margin: 0;
    }
    .nav-links {
        display: flex;
        gap: 1.5rem;
    }
    .nav-link, .mobile-link {
        background: none;
        border: none;
        color: #374151;
        font-weight: 500;
        cursor: pointer;
        transition: color 0.2s;
    }
    .nav-link:hover, .mobile-link:hover {
        color: #2563eb;
    }
    .nav-toggle {
        display: none;
        background: none;
        border: none;
        font-size: 1.6rem;
        color: #374151;
        cursor: pointer;
    }
    .mobile-menu {
        display: none;
        flex-direction: column;
        gap: 1rem;
        padding: 1rem 1.5rem;
        background: #fff;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .mobile-link {
        text-align: left;
        font-size: 1.125rem;
    }
    .hero {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        min-height: 100vh;
        padding: 8rem 1.5rem;
        background: linear-gradient(to right, #3b82f6, #a855f7);
        color: #fff;
        box-sizing: border-box;
    }
    .hero h1 {
        font-size: 3rem;
        margin-top: 2.5rem;
    }
    .hero p {
        font-size: 1.125rem;
        max-width: 32rem;
    }
    .hero-cta {
        margin-top: 1.5rem;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 9999px;
        background: #fff;
        color: #2563eb;
        font-weight: 600;
        cursor: pointer;
        transition: transform 0.15s;
    }
    .card-grid {
        max-width: 72rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .band {
        padding: 5rem 1.5rem;
        text-align: center;
    }
    .band h2 {
        font-size: 2.25rem;
        margin-bottom: 3rem;
    }
    .band-white { background: #fff; }
    .band-grey { background: #f9fafb; }
    .card {
        padding: 1.5rem;
        border-radius: 1rem;
        background: #fff;
        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
        transition: transform 0.2s, box-shadow 0.2s;
    }
    .card-soft { background: #f9fafb; }
    .card-icon {
        font-size: 2.5rem;
        margin-bottom: 1rem;
    }
    .hover-grow:hover {
        transform: scale(1.05);
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .press:hover { transform: scale(1.1); }
    .press:active { transform: scale(0.95); }
    .muted { color: #4b5563; }
    .star { color: #facc15; font-size: 2.25rem; margin-bottom: 0.75rem; }
    .quote { font-style: italic; color: #4b5563; margin-bottom: 1rem; }
    .role { color: #6b7280; font-size: 0.875rem; }
    .plan {
        display: flex;
        flex-direction: column;
    }
    .plan:hover { transform: scale(1.05); }
    .plan-highlight {
        background: #eff6ff;
        border: 2px solid #3b82f6;
    }
    .price {
        font-size: 2.25rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .plan-button {
        margin-top: auto;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 9999px;
        background: #3b82f6;
        color: #fff;
        font-weight: 600;
        cursor: pointer;
        transition: transform 0.15s;
    }
    .plan-button-strong { background: #2563eb; }
    .site-footer {
        background: #111827;
        color: #d1d5db;
        padding: 2.5rem 0;
        margin-top: 2.5rem;
    }
    .footer-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .social-links {
        display: flex;
        gap: 1.5rem;
        font-size: 1.5rem;
    }
    .social-links a {
        color: inherit;
        transition: transform 0.2s, color 0.2s;
    }
    .social-links a:hover {
        color: #fff;
        transform: scale(1.2) rotate(5deg);
    }
    .social-links a:active { transform: scale(0.9); }
    @media (max-width: 768px) {
        .nav-links { display: none; }
        .nav-toggle { display: block; }
        .mobile-menu { display: flex; }
        .card-grid { grid-template-columns: 1fr; }
        .footer-inner { flex-direction: column; gap: 1rem; }
        .hero h1 { font-size: 2.5rem; }
    }
"#;

fn motion_css() -> String {
    format!(
        "{}\n{}\n{}",
        load_reveal_css("reveal-on-load"),
        menu_enter_css("mobile-menu"),
        menu_exit_css("mobile-menu"),
    )
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let menu = use_state(MenuState::default);

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: ()| {
            let next = menu.toggled();
            log::debug!("Mobile menu expanded: {}", next.expanded);
            menu.set(next);
        })
    };

    let on_select = {
        let menu = menu.clone();
        Callback::from(move |section: SectionId| match DomViewport::current() {
            Ok(viewport) => {
                let (next, outcome) = select_section(*menu, &viewport, section.as_str());
                log::debug!("Navigate to #{}: {:?}", section, outcome);
                menu.set(next);
            }
            Err(e) => {
                log::warn!("Cannot scroll to #{}: {}", section, e);
                menu.set(menu.closed());
            }
        })
    };

    let on_get_started = on_select.reform(|_: MouseEvent| SectionId::Pricing);
    let on_choose_plan = Callback::from(|plan: &'static str| {
        log::info!("Plan selected: {}", plan);
    });

    let brand = config::get_brand_name();

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <style>{motion_css()}</style>

            <NavBar menu={*menu} on_toggle={on_toggle} on_select={on_select} />

            <RevealSection id={SectionId::Hero} tag="header" class="hero">
                <h1>{brand}</h1>
                <p>{"Organize your life, boost productivity, and collaborate effortlessly."}</p>
                <button class="hero-cta press" onclick={on_get_started}>{"Get Started"}</button>
            </RevealSection>

            <RevealSection id={SectionId::Features} class="band">
                <div class="card-grid">
                    { for FEATURES.iter().map(|feature| html! { <FeatureCard key={feature.title} feature={*feature} /> }) }
                </div>
            </RevealSection>

            <RevealSection id={SectionId::Testimonials} class="band band-white">
                <h2>{"What Our Users Say"}</h2>
                <div class="card-grid">
                    { for TESTIMONIALS.iter().map(|t| html! { <TestimonialCard key={t.name} testimonial={*t} /> }) }
                </div>
            </RevealSection>

            <RevealSection id={SectionId::Pricing} class="band band-grey">
                <h2>{"Choose Your Plan"}</h2>
                <div class="card-grid">
                    { for PLANS.iter().map(|plan| html! {
                        <PlanCard key={plan.name} plan={*plan} on_choose={on_choose_plan.clone()} />
                    }) }
                </div>
            </RevealSection>

            <RevealSection id={SectionId::Footer} tag="footer" class="site-footer">
                <div class="footer-inner">
                    <p>{copyright_line(current_year(), brand)}</p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a key={link.label} href={link.href} aria-label={link.label}>
                                <i class={link.icon}></i>
                            </a>
                        }) }
                    </div>
                </div>
            </RevealSection>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::reveal::{reveal_style, RevealState};
    use yew::LocalServerRenderer;

    fn render_page() -> String {
        futures::executor::block_on(LocalServerRenderer::<Landing>::new().render())
    }

    #[test]
    fn regions_render_in_page_order() {
        let page = render_page();
        let offsets: Vec<usize> = SectionId::ALL
            .iter()
            .map(|section| {
                let attr = format!("id=\"{}\"", section);
                page.find(&attr).unwrap_or_else(|| panic!("missing {}", attr))
            })
            .collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]), "out of order: {:?}", offsets);
    }

    #[test]
    fn footer_shows_current_year() {
        let page = render_page();
        let line = format!("© {} {}. All rights reserved.", current_year(), config::get_brand_name());
        assert!(page.contains(&line), "footer missing {:?}", line);
    }

    #[test]
    fn collapsed_menu_renders_no_dropdown() {
        let page = render_page();
        assert!(!page.contains("class=\"mobile-menu"));
        assert!(page.contains("aria-expanded=\"false\""));
        assert!(page.contains("fa-bars"));
    }

    #[test]
    fn only_first_screen_starts_visible() {
        let page = render_page();
        let hidden = reveal_style(RevealState::Hidden);
        assert_eq!(page.matches(hidden.as_str()).count(), 4);
        assert!(page.contains(reveal_style(RevealState::Visible).as_str()));
    }

    #[test]
    fn buttons_animate_their_press_scale() {
        let rule_start = LANDING_CSS.find(".hero-cta {").expect("hero-cta rule");
        let rule = &LANDING_CSS[rule_start..];
        let rule = &rule[..rule.find('}').expect("rule end")];
        assert!(rule.contains("transition: transform 0.15s;"));
    }
}

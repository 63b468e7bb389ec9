use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::sections::{SectionId, NAV_ITEMS};
use crate::state::menu::{DropdownPhase, MenuState};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub menu: MenuState,
    pub on_toggle: Callback<()>,
    pub on_select: Callback<SectionId>,
}

fn nav_links(on_select: &Callback<SectionId>, class: &'static str) -> Html {
    NAV_ITEMS
        .iter()
        .map(|item| {
            let section = item.section;
            let onclick = on_select.reform(move |_: MouseEvent| section);
            html! {
                <button key={section.as_str()} class={class} onclick={onclick}>
                    {item.label}
                </button>
            }
        })
        .collect()
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let expanded = props.menu.expanded;
    let on_logo = props.on_select.reform(|_: MouseEvent| SectionId::Hero);
    let on_toggle = props.on_toggle.reform(|_: MouseEvent| ());
    let phase = use_state(DropdownPhase::default);

    // Keep the dropdown mounted until its exit animation finishes
    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |expanded: &bool| {
                let next = phase.follow(*expanded);
                phase.set(next);
                let timeout = (next == DropdownPhase::Leaving).then(|| {
                    let phase = phase.clone();
                    Timeout::new(config::MENU_EXIT_MS, move || phase.set(next.settled()))
                });
                move || drop(timeout)
            },
            expanded,
        );
    }

    html! {
        <nav class="top-nav reveal-on-load">
            <div class="nav-inner">
                <h1 class="nav-logo" onclick={on_logo}>{config::get_brand_name()}</h1>

                <div class="nav-links">
                    { nav_links(&props.on_select, "nav-link") }
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded={expanded.to_string()}
                    onclick={on_toggle}
                >
                    <i class={if expanded { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                </button>
            </div>

            {
                match phase.render(expanded) {
                    Some(leaving) => html! {
                        <div class={classes!("mobile-menu", leaving.then_some("mobile-menu-leaving"))}>
                            { nav_links(&props.on_select, "mobile-link") }
                        </div>
                    },
                    None => html! {},
                }
            }
        </nav>
    }
}

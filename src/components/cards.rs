use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{Feature, Plan, Testimonial};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = props.feature;
    html! {
        <div class="card hover-grow">
            <div class="card-icon">
                <i class={feature.icon} style={format!("color: {};", feature.color)}></i>
            </div>
            <h3>{feature.title}</h3>
            <p class="muted">{feature.desc}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = props.testimonial;
    html! {
        <div class="card card-soft hover-grow">
            <i class="fas fa-star star"></i>
            <p class="quote">{format!("\"{}\"", t.text)}</p>
            <h4>{t.name}</h4>
            <p class="role">{t.role}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: Plan,
    pub on_choose: Callback<&'static str>,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = props.plan;
    let onclick = props.on_choose.reform(move |_: MouseEvent| plan.name);

    html! {
        <div class={classes!("card", "plan", plan.highlight.then_some("plan-highlight"))}>
            <h3>{plan.name}</h3>
            <p class="muted">{plan.desc}</p>
            <p class="price">{plan.price}</p>
            <button class={classes!("plan-button", "press", plan.highlight.then_some("plan-button-strong"))} onclick={onclick}>
                {plan.button}
            </button>
        </div>
    }
}

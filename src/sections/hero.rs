use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::easing::Ease;
use crate::animation::tween::{self, Pose, TweenSpec};

const RISE: Pose = Pose::REST.y(200.0);

#[function_component(Hero)]
pub fn hero() -> Html {
    let textbox_ref = use_node_ref();
    let badge_ref = use_node_ref();
    let tilted = use_state_eq(|| false);

    {
        let textbox_ref = textbox_ref.clone();
        let badge_ref = badge_ref.clone();
        use_effect_with_deps(
            move |_| {
                let textbox = textbox_ref.cast::<HtmlElement>().map(|el| {
                    tween::play(vec![el], TweenSpec::new(RISE, Pose::REST, 700.0, Ease::SineInOut), 0.0, |_| {}, || {})
                });
                let badge = badge_ref.cast::<HtmlElement>().map(|el| {
                    tween::play(
                        vec![el],
                        TweenSpec::new(RISE, Pose::REST, 700.0, Ease::SineInOut).delay(400.0),
                        0.0,
                        |_| {},
                        || {},
                    )
                });
                move || {
                    drop(textbox);
                    drop(badge);
                }
            },
            (),
        );
    }

    {
        let tilted = tilted.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(500, move || tilted.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div ref={textbox_ref} class="hero">
            <style>
                {r#"
                .hero {
                    margin: 0.5rem auto 0;
                    padding: 2.5rem 2rem;
                    height: calc(90vh - 6rem);
                    width: 90%;
                    max-width: 1280px;
                    box-sizing: border-box;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                }
                .hero-title {
                    font-size: clamp(3.75rem, 10vw, 8rem);
                    color: #fff;
                    padding-bottom: 1.25rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    justify-content: center;
                    align-items: center;
                    font-weight: bold;
                    line-height: 1.25;
                    letter-spacing: -0.025em;
                    text-align: center;
                }
                .hero-word {
                    display: inline-block;
                    animation: heroLetters 0.6s ease-out both;
                }
                .hero-word.late {
                    animation-delay: 0.25s;
                }
                .hero-badge {
                    display: inline-block;
                    color: #000;
                    background: linear-gradient(135deg, #e77402, #ffb15c);
                    font-size: clamp(3rem, 9vw, 140px);
                    margin: 0 0.5rem;
                    padding: 1.25rem;
                    border-radius: 2rem;
                    transition: transform 0.2s;
                }
                .hero-badge.tilted {
                    transform: rotate(-12deg);
                }
                @keyframes heroLetters {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
            <h1 class="hero-title">
                <span class="hero-word">{"CRAFTING"}</span>
                // The tween owns the wrapper's transform; the tilt lives on the inner badge.
                <span ref={badge_ref}>
                    <span class={classes!("hero-badge", (*tilted).then(|| "tilted"))}>{"CODE"}</span>
                </span>
                <span class="hero-word late">{"WITH PURPOSE"}</span>
            </h1>
        </div>
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::easing::Ease;
use crate::animation::scroll::{scroll_to_top, use_scrolled_past, SCROLL_TOP_THRESHOLD};
use crate::animation::tween::{self, Pose, TweenHandle, TweenSpec};

const POPPED: Pose = Pose::REST.opacity(0.0).scale(0.0);
const POP_MS: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pop {
    In,
    Out,
}

/// Which way the button animates for a scroll state; nothing while unmounted.
fn pop_for(past: bool, is_rendered: bool) -> Option<Pop> {
    match (is_rendered, past) {
        (false, _) => None,
        (true, true) => Some(Pop::In),
        (true, false) => Some(Pop::Out),
    }
}

/// Floating button shown once the page is scrolled past 300px. It pops in,
/// pops out, and is dropped from the DOM entirely while hidden.
#[function_component(ScrollToTop)]
pub fn scroll_to_top_button() -> Html {
    let past = use_scrolled_past(SCROLL_TOP_THRESHOLD);
    // Stays rendered through the pop-out, then unmounts.
    let rendered = use_state_eq(|| false);
    let button_ref = use_node_ref();
    let pop: Rc<RefCell<Option<TweenHandle>>> = use_mut_ref(|| None);

    {
        let rendered = rendered.clone();
        use_effect_with_deps(
            move |past: &bool| {
                if *past {
                    rendered.set(true);
                }
                || ()
            },
            past,
        );
    }

    let is_rendered = *rendered;
    {
        let rendered = rendered.clone();
        let button_ref = button_ref.clone();
        let pop = pop.clone();
        use_effect_with_deps(
            move |(past, is_rendered): &(bool, bool)| {
                let button = button_ref.cast::<HtmlElement>();
                if let (Some(pop_kind), Some(button)) = (pop_for(*past, *is_rendered), button) {
                    let handle = if pop_kind == Pop::In {
                        tween::play(
                            vec![button],
                            TweenSpec::new(POPPED, Pose::REST, POP_MS, Ease::Power2Out),
                            0.0,
                            |_| {},
                            || {},
                        )
                    } else {
                        tween::play(
                            vec![button],
                            TweenSpec::new(Pose::REST, POPPED, POP_MS, Ease::Power2In),
                            0.0,
                            |_| {},
                            move || rendered.set(false),
                        )
                    };
                    *pop.borrow_mut() = Some(handle);
                }
                || ()
            },
            (past, is_rendered),
        );
    }

    {
        let pop = pop.clone();
        yew_hooks::use_unmount(move || {
            pop.borrow_mut().take();
        });
    }

    if !is_rendered {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <>
            <style>
                {r#"
                .scroll-top {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 50;
                    padding: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 50%;
                    backdrop-filter: blur(12px);
                    color: #fff;
                    font-size: 1.25rem;
                    line-height: 1;
                    cursor: pointer;
                    transition: background 0.3s, box-shadow 0.3s;
                }
                .scroll-top:hover {
                    background: rgba(255, 255, 255, 0.2);
                    box-shadow: 0 10px 20px rgba(255, 255, 255, 0.1);
                }
                "#}
            </style>
            <button ref={button_ref} class="scroll-top" aria-label="Scroll to top" {onclick}>
                {"↑"}
            </button>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_pops_only_while_rendered() {
        assert_eq!(pop_for(true, false), None);
        assert_eq!(pop_for(false, false), None);
        assert_eq!(pop_for(true, true), Some(Pop::In));
        // scrolled back above the threshold: pop out, then unmount
        assert_eq!(pop_for(false, true), Some(Pop::Out));
    }
}

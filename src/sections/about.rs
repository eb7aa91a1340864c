use yew::prelude::*;

use crate::animation::reveal::{use_reveal, RevealOptions};
use crate::animation::tween::Pose;
use crate::content::ABOUT_ITEMS;

/// Single-open, collapsible: clicking the open item closes it.
pub fn toggle_item(open: Option<&'static str>, clicked: &'static str) -> Option<&'static str> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let title_ref = use_node_ref();
    let description_ref = use_node_ref();
    let container_ref = use_node_ref();
    let item_refs = use_memo(|_| ABOUT_ITEMS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());
    let open = use_state(|| None::<&'static str>);

    use_reveal(title_ref.clone(), vec![title_ref.clone()], RevealOptions::rising(50.0).band(80));
    use_reveal(
        description_ref.clone(),
        vec![description_ref.clone()],
        RevealOptions::rising(30.0).delay(200.0).band(80),
    );
    use_reveal(
        container_ref.clone(),
        (*item_refs).clone(),
        RevealOptions::default()
            .hidden(Pose::REST.opacity(0.0).y(60.0).scale(0.95))
            .stagger(150.0)
            .band(75),
    );

    html! {
        <main class="about">
            <style>
                {r#"
                .about {
                    color: #fff;
                    width: 100%;
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 0 1.25rem;
                    box-sizing: border-box;
                }
                .section-title {
                    font-size: clamp(3rem, 9vw, 6rem);
                    font-weight: bold;
                    text-align: center;
                    letter-spacing: -0.025em;
                    margin: 0;
                }
                .accent-chip {
                    color: #000;
                    background: linear-gradient(135deg, #e77402, #ffb15c);
                    opacity: 0.75;
                    padding: 0 1rem;
                    border-radius: 0.75rem;
                }
                .section-lead {
                    color: #f3f4f6;
                    text-align: center;
                    margin: 2.5rem auto 0;
                    font-size: 1.5rem;
                    max-width: 42rem;
                }
                .accordion {
                    margin-top: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .accordion-item {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    transition: all 0.3s;
                }
                .accordion-item:hover {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.2);
                    box-shadow: 0 20px 25px rgba(255, 255, 255, 0.05);
                }
                .accordion-trigger {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: clamp(1.875rem, 4vw, 2.25rem);
                    font-weight: 600;
                    padding: 1.25rem 1.5rem;
                    cursor: pointer;
                    text-align: left;
                }
                .accordion-chevron {
                    transition: transform 0.2s;
                    font-size: 1.25rem;
                }
                .accordion-item.open .accordion-chevron {
                    transform: rotate(180deg);
                }
                .accordion-content {
                    color: #d1d5db;
                    padding: 0 1.75rem 1.5rem;
                    font-size: 1.2rem;
                    line-height: 1.7;
                    font-weight: 300;
                }
                .accordion-content ul {
                    margin-top: 1rem;
                    padding: 0;
                    list-style: none;
                }
                .accordion-content li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .accordion-content li::before {
                    content: '';
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #e77402;
                }
                "#}
            </style>
            <h1 ref={title_ref} class="section-title">
                {"ABOUT "}<span class="accent-chip">{"ME"}</span>
            </h1>
            <p ref={description_ref} class="section-lead">
                {"I'm Garv Yadav, a passionate MERN stack developer crafting clean, interactive, and human-centered digital experiences."}
            </p>
            <div ref={container_ref} class="accordion">
                { for ABOUT_ITEMS.iter().zip(item_refs.iter()).map(|(item, item_ref)| {
                    let is_open = *open == Some(item.key);
                    let onclick = {
                        let open = open.clone();
                        let key = item.key;
                        Callback::from(move |_: MouseEvent| open.set(toggle_item(*open, key)))
                    };
                    html! {
                        <div key={item.key} ref={item_ref.clone()}>
                            <div class={classes!("accordion-item", is_open.then(|| "open"))}>
                                <button class="accordion-trigger" aria-expanded={is_open.to_string()} {onclick}>
                                    {item.title}
                                    <span class="accordion-chevron">{"⌄"}</span>
                                </button>
                                if is_open {
                                    <div class="accordion-content">
                                        <p>{item.body}</p>
                                        if !item.bullets.is_empty() {
                                            <ul>
                                                { for item.bullets.iter().map(|bullet| html! { <li>{*bullet}</li> }) }
                                            </ul>
                                        }
                                    </div>
                                }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_opens_one_item_at_a_time() {
        let open = toggle_item(None, "who");
        assert_eq!(open, Some("who"));
        assert_eq!(toggle_item(open, "what"), Some("what"));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        assert_eq!(toggle_item(Some("who"), "who"), None);
    }
}

use yew::prelude::*;

use crate::animation::easing::Ease;
use crate::animation::reveal::{use_reveal, RevealOptions};
use crate::animation::tween::Pose;
use crate::content::{Skill, SKILLS};

const RESTING_ICON_COLOR: &str = "#ffffff";

/// Icons sit in white until hovered, then take their brand color.
fn icon_color(skill: &Skill, hovered: bool) -> &'static str {
    if hovered {
        skill.color
    } else {
        RESTING_ICON_COLOR
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let title_ref = use_node_ref();
    let description_ref = use_node_ref();
    let grid_ref = use_node_ref();
    let icon_refs = use_memo(|_| SKILLS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());
    let hovered = use_state_eq(|| None::<usize>);

    use_reveal(title_ref.clone(), vec![title_ref.clone()], RevealOptions::rising(50.0).band(90));
    use_reveal(
        description_ref.clone(),
        vec![description_ref.clone()],
        RevealOptions::rising(30.0).delay(200.0).band(90),
    );
    use_reveal(
        grid_ref.clone(),
        (*icon_refs).clone(),
        RevealOptions::default()
            .hidden(Pose::REST.opacity(0.0).scale(0.0).rotation(-180.0))
            .duration(600.0)
            .stagger(80.0)
            .ease(Ease::BackOut(1.7))
            .band(90),
    );

    html! {
        <section class="services">
            <style>
                {r#"
                .services {
                    color: #fff;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.25rem;
                    box-sizing: border-box;
                }
                .skills-grid {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
                    gap: 2rem;
                }
                .skill-tile {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem 1rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    cursor: default;
                    transition: background 0.3s, border-color 0.3s, box-shadow 0.3s;
                }
                .skill-tile:hover {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.2);
                    box-shadow: 0 10px 30px rgba(231, 116, 2, 0.15);
                }
                .skill-icon-wrap {
                    display: inline-block;
                }
                .skill-icon {
                    font-size: 3rem;
                    font-weight: 800;
                    line-height: 1;
                    transition: color 0.3s;
                }
                .skill-name {
                    font-size: 1rem;
                    font-weight: 600;
                    color: #d1d5db;
                }
                "#}
            </style>
            <h1 ref={title_ref} class="section-title">
                {"MY "}<span class="accent-chip">{"SKILLS"}</span>
            </h1>
            <p ref={description_ref} class="section-lead">
                {"The tools and technologies I use to bring ideas to life."}
            </p>
            <div ref={grid_ref} class="skills-grid">
                { for SKILLS.iter().zip(icon_refs.iter()).enumerate().map(|(index, (skill, icon_ref))| {
                    let is_hovered = *hovered == Some(index);
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };
                    html! {
                        <div key={skill.name} class="skill-tile" {onmouseenter} {onmouseleave}>
                            // Re-rendering the color must not clobber the tween's inline transform.
                            <span ref={icon_ref.clone()} class="skill-icon-wrap">
                                <span class="skill-icon" style={format!("color: {};", icon_color(skill, is_hovered))}>
                                    {skill.glyph}
                                </span>
                            </span>
                            <span class="skill-name">{skill.name}</span>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_switches_icon_to_brand_color() {
        let react = &SKILLS[0];
        assert_eq!(icon_color(react, false), RESTING_ICON_COLOR);
        assert_eq!(icon_color(react, true), "#61DAFB");
    }
}

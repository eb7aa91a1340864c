use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::easing::Ease;
use crate::animation::reveal::{use_reveal, RevealOptions};
use crate::animation::tween::{self, Pose, TweenHandle, TweenSpec};
use crate::content::Project;

const HOVER_MS: f64 = 300.0;
const IMAGE_HOVERED: Pose = Pose::REST.scale(1.1);
const CONTENT_HOVERED: Pose = Pose::REST.y(-10.0);

/// Poses of the image and the text block at a hover level between 0 and 1.
fn hover_poses(level: f64) -> (Pose, Pose) {
    (
        Pose::REST.lerp(&IMAGE_HOVERED, level),
        Pose::REST.lerp(&CONTENT_HOVERED, level),
    )
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let card_ref = use_node_ref();
    let image_ref = use_node_ref();
    let content_ref = use_node_ref();
    let hover_level = use_mut_ref(|| 0.0_f64);
    let hover_tweens: Rc<RefCell<Vec<TweenHandle>>> = use_mut_ref(Vec::new);

    use_reveal(
        card_ref.clone(),
        vec![card_ref.clone()],
        RevealOptions::default()
            .hidden(Pose::REST.opacity(0.0).y(40.0).scale(0.9))
            .delay(props.index as f64 * 150.0)
            .band(90),
    );

    // Starts from wherever the previous hover tween left off, so a quick
    // leave-then-enter never snaps.
    let hover_to = {
        let image_ref = image_ref.clone();
        let content_ref = content_ref.clone();
        let hover_level = hover_level.clone();
        let hover_tweens = hover_tweens.clone();
        move |target: f64| {
            let start = *hover_level.borrow();
            let (image_from, content_from) = hover_poses(start);
            let (image_to, content_to) = hover_poses(target);
            let mut running = hover_tweens.borrow_mut();
            running.clear();

            if let Some(image) = image_ref.cast::<HtmlElement>() {
                let hover_level = hover_level.clone();
                running.push(tween::play(
                    vec![image],
                    TweenSpec::new(image_from, image_to, HOVER_MS, Ease::Power2Out),
                    0.0,
                    move |progress| *hover_level.borrow_mut() = start + (target - start) * progress,
                    || {},
                ));
            }
            if let Some(content) = content_ref.cast::<HtmlElement>() {
                running.push(tween::play(
                    vec![content],
                    TweenSpec::new(content_from, content_to, HOVER_MS, Ease::Power2Out),
                    0.0,
                    |_| {},
                    || {},
                ));
            }
        }
    };

    let onmouseenter = {
        let hover_to = hover_to.clone();
        Callback::from(move |_: MouseEvent| hover_to(1.0))
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| hover_to(0.0));

    {
        let hover_tweens = hover_tweens.clone();
        yew_hooks::use_unmount(move || hover_tweens.borrow_mut().clear());
    }

    html! {
        <article ref={card_ref} class="project-card" {onmouseenter} {onmouseleave}>
            <div class="project-media">
                <div ref={image_ref} class="project-image">
                    {
                        match project.image {
                            Some(src) => html! { <img src={src} alt={project.title} loading="lazy" /> },
                            None => html! { <span class="project-initial">{project.initial()}</span> },
                        }
                    }
                </div>
            </div>
            <div ref={content_ref} class="project-content">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-tags">
                    { for project.tech_stack.iter().map(|tech| html! {
                        <span key={*tech} class="project-tag">{*tech}</span>
                    }) }
                </div>
                <div class="project-links">
                    if let Some(live) = project.live_link {
                        <a class="project-link primary" href={live} target="_blank" rel="noopener noreferrer">
                            {"Live Demo"}
                        </a>
                    }
                    if let Some(github) = project.github_link {
                        <a class="project-link" href={github} target="_blank" rel="noopener noreferrer">
                            {"Code"}
                        </a>
                    }
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_poses_span_rest_to_lifted() {
        assert_eq!(hover_poses(0.0), (Pose::REST, Pose::REST));
        assert_eq!(hover_poses(1.0), (IMAGE_HOVERED, CONTENT_HOVERED));
    }

    #[test]
    fn partial_hover_is_in_between() {
        let (image, content) = hover_poses(0.5);
        assert!((image.scale - 1.05).abs() < 1e-9);
        assert!((content.y + 5.0).abs() < 1e-9);
    }
}

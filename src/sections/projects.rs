use yew::prelude::*;

use crate::animation::reveal::{use_reveal, RevealOptions};
use crate::content::PROJECTS;
use crate::sections::project_card::ProjectCard;

#[function_component(Projects)]
pub fn projects() -> Html {
    let title_ref = use_node_ref();
    let description_ref = use_node_ref();

    use_reveal(title_ref.clone(), vec![title_ref.clone()], RevealOptions::rising(50.0).band(90));
    use_reveal(
        description_ref.clone(),
        vec![description_ref.clone()],
        RevealOptions::rising(30.0).delay(200.0).band(90),
    );

    html! {
        <section class="projects">
            <style>
                {r#"
                .projects {
                    color: #fff;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.25rem;
                    box-sizing: border-box;
                }
                .projects-grid {
                    margin-top: 4rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                    transition: border-color 0.3s, box-shadow 0.3s;
                }
                .project-card:hover {
                    border-color: rgba(231, 116, 2, 0.5);
                    box-shadow: 0 20px 40px rgba(231, 116, 2, 0.15);
                }
                .project-media {
                    height: 12rem;
                    overflow: hidden;
                }
                .project-image {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, rgba(231, 116, 2, 0.35), rgba(255, 177, 92, 0.1));
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .project-initial {
                    font-size: 4rem;
                    font-weight: 800;
                    color: rgba(255, 255, 255, 0.8);
                }
                .project-content {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    flex: 1;
                }
                .project-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0;
                }
                .project-description {
                    color: #9ca3af;
                    line-height: 1.6;
                    margin: 0;
                }
                .project-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .project-tag {
                    font-size: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(231, 116, 2, 0.15);
                    color: #ffb15c;
                }
                .project-links {
                    margin-top: auto;
                    display: flex;
                    gap: 1rem;
                }
                .project-link {
                    padding: 0.5rem 1.25rem;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                    transition: background 0.2s;
                }
                .project-link:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .project-link.primary {
                    background: #e77402;
                    border-color: #e77402;
                    color: #000;
                }
                .project-link.primary:hover {
                    background: #ffb15c;
                }
                "#}
            </style>
            <h1 ref={title_ref} class="section-title">
                {"MY "}<span class="accent-chip">{"PROJECTS"}</span>
            </h1>
            <p ref={description_ref} class="section-lead">
                {"A selection of things I've built, from full-stack platforms to small tools."}
            </p>
            <div class="projects-grid">
                { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                    <ProjectCard key={project.title} project={*project} {index} />
                }) }
            </div>
        </section>
    }
}

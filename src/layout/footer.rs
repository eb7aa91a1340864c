use chrono::Datelike;
use yew::prelude::*;

use crate::animation::reveal::{use_reveal, RevealOptions};
use crate::components::lazy_section::use_section_nav;
use crate::config::{self, CONTACT, SITE, SOCIALS};
use crate::content::NAV_LINKS;

fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, SITE.author)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    let content_ref = use_node_ref();
    let navigator = use_section_nav();

    use_reveal(
        footer_ref.clone(),
        vec![content_ref.clone()],
        RevealOptions::rising(30.0).band(90),
    );

    let year = chrono::Local::now().year();

    html! {
        <footer ref={footer_ref} class="site-footer">
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    margin-top: 5rem;
                    padding: 4rem 1.25rem 2rem;
                    color: #fff;
                    backdrop-filter: blur(12px);
                }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 3rem;
                }
                .footer-brand {
                    font-size: 1.875rem;
                    font-weight: 800;
                    letter-spacing: 0.1em;
                    margin-bottom: 1rem;
                }
                .footer-text {
                    color: #9ca3af;
                    line-height: 1.6;
                }
                .footer-heading {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .footer-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-list a {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .footer-list a:hover {
                    color: #fff;
                }
                .footer-bottom {
                    max-width: 80rem;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                "#}
            </style>
            <div ref={content_ref}>
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">{SITE.name}</h3>
                        <p class="footer-text">{SITE.description}</p>
                    </div>
                    <div>
                        <h4 class="footer-heading">{"Quick Links"}</h4>
                        <ul class="footer-list">
                            { for NAV_LINKS.iter().map(|link| {
                                let id = link.id;
                                let navigator = navigator.clone();
                                let onclick = Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    navigator.go(id);
                                });
                                html! {
                                    <li key={id}>
                                        <a href={format!("#{}", id)} {onclick}>{title_case(link.label)}</a>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer-heading">{"Connect"}</h4>
                        <ul class="footer-list">
                            <li>
                                <a href={config::mailto_href(CONTACT.email, &format!("Hello from {}", SITE.url))}>
                                    {CONTACT.email}
                                </a>
                            </li>
                            <li><a href={SOCIALS.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a></li>
                            <li><a href={SOCIALS.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a></li>
                            <li><a href={SOCIALS.twitter} target="_blank" rel="noopener noreferrer">{"Twitter"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    {copyright_line(year)}
                </div>
            </div>
        </footer>
    }
}

/// "PROJECTS" -> "Projects"
fn title_case(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_links_use_title_case_labels() {
        assert_eq!(title_case("HOME"), "Home");
        assert_eq!(title_case("PROJECTS"), "Projects");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn copyright_names_the_author() {
        assert_eq!(copyright_line(2026), "© 2026 Garv Yadav. All rights reserved.");
    }
}

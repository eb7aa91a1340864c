use yew::prelude::*;

use crate::components::lazy_section::{LazySection, SectionNavHost};
use crate::layout::footer::Footer;
use crate::layout::navbar::Navbar;
use crate::layout::section_transition::SectionTransition;
use crate::sections::{about::About, contact::Contact, hero::Hero, projects::Projects, services::Services};

#[derive(Properties, PartialEq)]
struct LazyBlockProps {
    id: &'static str,
    delay_ms: f64,
    children: Children,
}

/// A below-the-fold section: loads lazily, then slides up as it enters view.
#[function_component(LazyBlock)]
fn lazy_block(props: &LazyBlockProps) -> Html {
    html! {
        <section id={props.id} class="page-section">
            <LazySection>
                <SectionTransition delay_ms={props.delay_ms}>
                    { for props.children.iter() }
                </SectionTransition>
            </LazySection>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <style>
                {r#"
                .home {
                    min-height: 100vh;
                    padding-top: 1.25rem;
                }
                .page-section {
                    padding: 5rem 0;
                    scroll-margin-top: 1rem;
                }
                "#}
            </style>
            <SectionNavHost>
                <Navbar />
                <section id="hero">
                    <Hero />
                </section>
                <LazyBlock id="about" delay_ms={0.0}>
                    <About />
                </LazyBlock>
                <LazyBlock id="services" delay_ms={100.0}>
                    <Services />
                </LazyBlock>
                <LazyBlock id="projects" delay_ms={200.0}>
                    <Projects />
                </LazyBlock>
                <LazyBlock id="contact" delay_ms={300.0}>
                    <Contact />
                </LazyBlock>
                <LazySection>
                    <Footer />
                </LazySection>
            </SectionNavHost>
        </div>
    }
}

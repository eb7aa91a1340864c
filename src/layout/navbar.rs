use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::easing::Ease;
use crate::animation::tween::{self, Pose, TweenSpec};
use crate::components::lazy_section::use_section_nav;
use crate::config::SITE;
use crate::content::{NavLink, NAV_LINKS};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let nav_ref = use_node_ref();
    let navigator = use_section_nav();

    // Slide the bar down from above on first paint.
    {
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |_| {
                let entrance = nav_ref.cast::<HtmlElement>().map(|nav| {
                    tween::play(
                        vec![nav],
                        TweenSpec::new(Pose::REST.y(-100.0), Pose::REST, 2000.0, Ease::Power3InOut),
                        0.0,
                        |_| {},
                        || {},
                    )
                });
                move || drop(entrance)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let nav_item = |link: &NavLink, class: &'static str| {
        let id = link.id;
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.go(id);
            menu_open.set(false);
        });
        html! {
            <a key={id} class={class} href={format!("#{}", id)} {onclick}>
                {link.label}
            </a>
        }
    };

    html! {
        <>
            <style>
                {r#"
                .top-nav {
                    width: 92%;
                    height: 70px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 1.5rem;
                    box-sizing: border-box;
                    border: 1px solid #a6a6a65c;
                    border-radius: 9999px;
                    backdrop-filter: blur(16px);
                    box-shadow: 0 0 20px rgba(0, 0, 0, 0.35);
                    position: relative;
                    z-index: 50;
                }
                .nav-logo {
                    font-weight: 800;
                    letter-spacing: 0.2em;
                    color: #ececec;
                    transition: transform 0.3s;
                }
                .nav-logo:hover {
                    transform: scale(1.05);
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                    letter-spacing: 0.05em;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .nav-link {
                    color: #ececec;
                    text-decoration: none;
                    cursor: pointer;
                    transition: color 0.2s;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                }
                .mobile-menu-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(4px);
                }
                .mobile-menu-panel {
                    position: absolute;
                    top: 5rem;
                    left: 4%;
                    right: 4%;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 1rem;
                    backdrop-filter: blur(16px);
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .mobile-nav-link {
                    display: block;
                    padding: 0.75rem 1rem;
                    color: #fff;
                    text-align: center;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    text-decoration: none;
                    border-radius: 0.5rem;
                    transition: background 0.2s;
                }
                .mobile-nav-link:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                @media (max-width: 767px) {
                    .nav-links { display: none; }
                    .burger-menu { display: block; }
                }
                @media (min-width: 768px) {
                    .mobile-menu { display: none; }
                }
                "#}
            </style>
            <nav ref={nav_ref} class="top-nav">
                <span class="nav-logo">{SITE.name}</span>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| nav_item(link, "nav-link")) }
                </div>
                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={menu_open.to_string()}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </nav>
            if *menu_open {
                <div class="mobile-menu">
                    <div class="mobile-menu-backdrop" onclick={close_menu}></div>
                    <div class="mobile-menu-panel">
                        { for NAV_LINKS.iter().map(|link| nav_item(link, "mobile-nav-link")) }
                    </div>
                </div>
            }
        </>
    }
}

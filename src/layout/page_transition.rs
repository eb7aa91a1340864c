use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::{use_mount, use_unmount};

use crate::animation::timeline::{percentage, Part, PreloaderStage};
use crate::animation::tween::{self, TweenHandle};
use crate::config::SITE;

#[derive(Properties, PartialEq)]
pub struct PageTransitionProps {
    #[prop_or_default]
    pub children: Children,
}

/// Full-screen branded preloader. Renders the page underneath right away and
/// runs the entrance timeline on top of it.
#[function_component(PageTransition)]
pub fn page_transition(props: &PageTransitionProps) -> Html {
    let stage = use_state_eq(|| PreloaderStage::Loading);
    let percent = use_state_eq(|| 0u8);
    let overlay_ref = use_node_ref();
    let logo_ref = use_node_ref();
    let readout_ref = use_node_ref();
    let content_ref = use_node_ref();
    // Every tween started by any stage; only emptied on unmount so a
    // non-gating tween outlives the stage that started it.
    let running: Rc<RefCell<Vec<TweenHandle>>> = use_mut_ref(Vec::new);

    use_mount(|| log::info!("Preloader started"));

    {
        let running = running.clone();
        use_unmount(move || {
            running.borrow_mut().clear();
        });
    }

    {
        let stage_setter = stage.setter();
        let percent_setter = percent.setter();
        let running = running.clone();
        let overlay_ref = overlay_ref.clone();
        let logo_ref = logo_ref.clone();
        let readout_ref = readout_ref.clone();
        let content_ref = content_ref.clone();
        use_effect_with_deps(
            move |stage: &PreloaderStage| {
                let stage = *stage;
                log::debug!("preloader stage {:?}", stage);

                let element_for = |part: &Part| -> Option<HtmlElement> {
                    match part {
                        Part::Overlay => overlay_ref.cast(),
                        Part::Logo => logo_ref.cast(),
                        Part::Readout => readout_ref.cast(),
                        Part::Content => content_ref.cast(),
                        Part::Progress => None,
                    }
                };

                let mut running = running.borrow_mut();
                running.retain(TweenHandle::is_running);

                for step in stage.steps() {
                    let targets: Vec<HtmlElement> = step.parts.iter().filter_map(|part| element_for(part)).collect();

                    let drives_readout = step.parts.contains(&Part::Progress);
                    let percent_setter = percent_setter.clone();
                    let on_update = move |progress: f64| {
                        if drives_readout {
                            percent_setter.set(percentage(progress));
                        }
                    };

                    let gates = step.gates;
                    let stage_setter = stage_setter.clone();
                    let on_complete = move || {
                        if gates {
                            stage_setter.set(stage.next());
                        }
                    };

                    running.push(tween::play(targets, step.spec, 0.0, on_update, on_complete));
                }

                if stage.is_done() {
                    log::info!("Preloader finished");
                }
                || ()
            },
            *stage,
        );
    }

    let overlay_style = if stage.blocks_input() {
        "pointer-events: auto;"
    } else {
        "display: none; pointer-events: none;"
    };

    html! {
        <>
            <style>
                {r#"
                .preloader {
                    position: fixed;
                    inset: 0;
                    z-index: 9999;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                }
                .preloader-bg {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(231, 116, 2, 0.95) 0%, rgba(0, 0, 0, 0.95) 100%);
                }
                .preloader-logo {
                    position: relative;
                    z-index: 10;
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 800;
                    letter-spacing: 0.2em;
                    color: #fff;
                }
                .preloader-readout {
                    position: relative;
                    z-index: 10;
                    margin-top: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .preloader-percent {
                    font-size: clamp(2.25rem, 6vw, 3.75rem);
                    font-weight: bold;
                    color: #fff;
                    letter-spacing: -0.025em;
                }
                .preloader-bar {
                    margin-top: 1rem;
                    width: 16rem;
                    height: 4px;
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                    overflow: hidden;
                }
                .preloader-bar-fill {
                    height: 100%;
                    background: #fff;
                    border-radius: 9999px;
                    transition: width 0.3s ease-out;
                }
                .page-content {
                    position: relative;
                }
                @media (min-width: 768px) {
                    .preloader-bar { width: 20rem; }
                }
                "#}
            </style>
            <div ref={overlay_ref} class="preloader" style={overlay_style}>
                <div class="preloader-bg"></div>
                <div ref={logo_ref} class="preloader-logo" aria-label={format!("{} Logo", SITE.name)}>
                    {SITE.name}
                </div>
                <div ref={readout_ref} class="preloader-readout">
                    <div class="preloader-percent">{format!("{}%", *percent)}</div>
                    <div class="preloader-bar">
                        <div class="preloader-bar-fill" style={format!("width: {}%;", *percent)}></div>
                    </div>
                </div>
            </div>
            <div ref={content_ref} class="page-content">
                { for props.children.iter() }
            </div>
        </>
    }
}

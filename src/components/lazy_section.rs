use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::animation::reveal::RevealWatcher;
use crate::animation::scroll::scroll_to_section;
use crate::components::ui::SectionLoader;

// Start rendering a little before the placeholder scrolls into view.
const PRELOAD_MARGIN: &str = "200px 0px 200px 0px";

pub enum NavAction {
    Navigate(&'static str),
    Arrived,
}

/// In-page navigation state shared by the lazy sections. The first jump to
/// an anchor loads every lazy section, so the scroll target is measured
/// against real section heights instead of spinner placeholders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionNav {
    pub load_all: bool,
    /// Anchor to scroll to once the loaded sections have rendered.
    pub target: Option<&'static str>,
}

impl Reducible for SectionNav {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NavAction::Navigate(id) => Rc::new(SectionNav {
                load_all: true,
                target: Some(id),
            }),
            NavAction::Arrived => Rc::new(SectionNav {
                target: None,
                ..(*self).clone()
            }),
        }
    }
}

pub fn should_render(near_viewport: bool, load_all: bool) -> bool {
    near_viewport || load_all
}

#[derive(Clone, PartialEq)]
pub struct SectionNavigator {
    state: Rc<SectionNav>,
    dispatch: Callback<NavAction>,
}

impl SectionNavigator {
    /// Smooth-scrolls to the section with `id`, loading lazy sections first.
    pub fn go(&self, id: &'static str) {
        self.dispatch.emit(NavAction::Navigate(id));
    }

    pub fn load_all(&self) -> bool {
        self.state.load_all
    }
}

#[hook]
pub fn use_section_nav() -> SectionNavigator {
    use_context::<SectionNavigator>().unwrap_or_else(|| SectionNavigator {
        state: Rc::new(SectionNav::default()),
        dispatch: Callback::from(|action: NavAction| {
            if let NavAction::Navigate(id) = action {
                scroll_to_section(id);
            }
        }),
    })
}

#[derive(Properties, PartialEq)]
pub struct SectionNavHostProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionNavHost)]
pub fn section_nav_host(props: &SectionNavHostProps) -> Html {
    let nav = use_reducer(SectionNav::default);

    let dispatch = {
        let dispatcher = nav.dispatcher();
        use_memo(
            move |_| Callback::from(move |action: NavAction| dispatcher.dispatch(action)),
            (),
        )
    };

    // Effects run after the children's render commits, so the freshly
    // loaded sections are already in the layout when this scrolls.
    {
        let dispatch = (*dispatch).clone();
        use_effect_with_deps(
            move |target: &Option<&'static str>| {
                if let Some(id) = *target {
                    scroll_to_section(id);
                    dispatch.emit(NavAction::Arrived);
                }
                || ()
            },
            nav.target,
        );
    }

    let navigator = SectionNavigator {
        state: Rc::new((*nav).clone()),
        dispatch: (*dispatch).clone(),
    };

    html! {
        <ContextProvider<SectionNavigator> context={navigator}>
            { for props.children.iter() }
        </ContextProvider<SectionNavigator>>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazySectionProps {
    #[prop_or_default]
    pub children: Children,
}

/// Defers rendering its children until the spinner placeholder nears the
/// viewport, or until an in-page jump asks for every section. Each lazy
/// section loads on its own.
#[function_component(LazySection)]
pub fn lazy_section(props: &LazySectionProps) -> Html {
    let near_viewport = use_state_eq(|| false);
    let placeholder = use_node_ref();
    let nav = use_section_nav();

    let shown = should_render(*near_viewport, nav.load_all());

    {
        let near_viewport = near_viewport.clone();
        let placeholder = placeholder.clone();
        use_effect_with_deps(
            move |shown: &bool| {
                let watcher = if *shown {
                    None
                } else {
                    placeholder.cast::<Element>().and_then(|element| {
                        let on_near = near_viewport.clone();
                        RevealWatcher::watch(&element, PRELOAD_MARGIN, move || on_near.set(true))
                            .map_err(|err| {
                                log::warn!("lazy loading unavailable, rendering eagerly: {:?}", err);
                                near_viewport.set(true);
                            })
                            .ok()
                    })
                };
                move || drop(watcher)
            },
            shown,
        );
    }

    if shown {
        html! { <>{ for props.children.iter() }</> }
    } else {
        html! {
            <div ref={placeholder}>
                <SectionLoader />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_stay_deferred_until_near_or_navigated() {
        let idle = SectionNav::default();
        assert!(!should_render(false, idle.load_all));
        assert!(should_render(true, idle.load_all));

        let jumped = Rc::new(idle).reduce(NavAction::Navigate("contact"));
        assert!(should_render(false, jumped.load_all));
    }

    #[test]
    fn navigating_loads_everything_then_scrolls_once() {
        let nav = Rc::new(SectionNav::default()).reduce(NavAction::Navigate("contact"));
        assert!(nav.load_all);
        assert_eq!(nav.target, Some("contact"));

        let arrived = nav.reduce(NavAction::Arrived);
        assert_eq!(arrived.target, None);
        // later jumps no longer wait on placeholders
        assert!(arrived.load_all);

        let again = arrived.reduce(NavAction::Navigate("about"));
        assert_eq!(again.target, Some("about"));
    }
}

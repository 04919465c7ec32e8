use dioxus::prelude::*;
use dioxus_router::prelude::*;

use gloo_timers::callback::Timeout;

use catalog::{CATEGORIES, Category};

use crate::Route;
use crate::common::{assets, dom};
use crate::components::footer::Footer;
use crate::components::menu::{CLOSE_DELAY_MS, MenuState, TimerAction};

// map a state machine decision onto the single pending close timer
//
// storing a new Timeout (or None) drops the previous one, which cancels it,
// so at most one close can ever be in flight
fn apply_timer(
    action: TimerAction,
    mut menu: Signal<MenuState>,
    mut pending_close: Signal<Option<Timeout>>,
) {
    match action {
        TimerAction::Keep => {}
        TimerAction::Cancel => pending_close.set(None),
        TimerAction::Schedule => {
            pending_close.set(Some(Timeout::new(CLOSE_DELAY_MS, move || {
                menu.write().close_elapsed();
            })));
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CategoryNavItemProps {
    category: &'static Category,
    menu: Signal<MenuState>,
    pending_close: Signal<Option<Timeout>>,
}

// desktop nav entry that both links to its category page and opens the
// category dropdown while hovered
#[component]
fn CategoryNavItem(props: CategoryNavItemProps) -> Element {
    let category = props.category;
    let mut menu = props.menu;
    let pending_close = props.pending_close;

    let current_path: Route = use_route();
    let target = Route::CategoryDetail {
        category_id: category.id.to_string(),
    };

    rsx! {
        div {
            class: "nav-item",
            onmouseenter: move |_| {
                let action = menu.write().pointer_enter(category.id);
                apply_timer(action, menu, pending_close);
            },
            onmouseleave: move |_| {
                let action = menu.write().pointer_leave();
                apply_timer(action, menu, pending_close);
            },
            Link {
                class: if current_path == (target) { "nav-link active" } else { "nav-link" },
                to: target,
                onclick: move |_| {
                    let action = menu.write().dismiss_dropdown();
                    apply_timer(action, menu, pending_close);
                },
                "{category.title}"
            }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let mut menu = use_signal(MenuState::default);
    let pending_close = use_signal(|| None::<Timeout>);

    // the drawer suspends page scrolling underneath itself
    use_effect(move || {
        dom::lock_body_scroll(menu.read().drawer_open());
    });

    use_drop(move || {
        dom::lock_body_scroll(false);
    });

    let current_path: Route = use_route();

    let open_category = menu.read().dropdown().and_then(catalog::category);

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {},
                        img { src: assets::NAV_LOGO, alt: catalog::VENDOR }
                    }
                }

                nav { class: "nav-links",
                    for category in CATEGORIES.iter() {
                        CategoryNavItem {
                            key: "{category.id}",
                            category,
                            menu,
                            pending_close,
                        }
                    }
                    a { class: "nav-link", href: "/#about", "About" }
                    Link {
                        class: if current_path == (Route::Contact {}) { "nav-link active" } else { "nav-link" },
                        to: Route::Contact {},
                        "Contact Us"
                    }
                }

                button {
                    class: "nav-toggle",
                    aria_label: "Open navigation menu",
                    onclick: move |_| menu.write().toggle_drawer(),
                    svg {
                        width: "24",
                        height: "24",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M4 6h16M4 12h16M4 18h16" }
                    }
                }
            }
        }

        // category dropdown, kept up while the pointer is on the trigger or
        // the panel itself
        if let Some(category) = open_category {
            div {
                class: "menu-backdrop",
                onclick: move |_| {
                    let action = menu.write().dismiss_dropdown();
                    apply_timer(action, menu, pending_close);
                },
            }
            div {
                class: "menu-panel",
                onmouseenter: move |_| {
                    let action = menu.write().pointer_enter(category.id);
                    apply_timer(action, menu, pending_close);
                },
                onmouseleave: move |_| {
                    let action = menu.write().pointer_leave();
                    apply_timer(action, menu, pending_close);
                },
                div { class: "menu-panel-inner",
                    for product in category.products.iter() {
                        Link {
                            class: "menu-entry",
                            key: "{product.id}",
                            to: Route::CategoryDetail { category_id: category.id.to_string() },
                            onclick: move |_| {
                                let action = menu.write().dismiss_dropdown();
                                apply_timer(action, menu, pending_close);
                            },
                            img { src: product.image_url, alt: product.title, loading: "lazy" }
                            div {
                                h4 { "{product.title}" }
                                p { "{product.description}" }
                            }
                        }
                    }
                    Link {
                        class: "menu-view-all",
                        to: Route::CategoryDetail { category_id: category.id.to_string() },
                        onclick: move |_| {
                            let action = menu.write().dismiss_dropdown();
                            apply_timer(action, menu, pending_close);
                        },
                        "View all {category.title} products"
                    }
                }
            }
        }

        // mobile drawer
        if menu.read().drawer_open() {
            div {
                class: "drawer-backdrop",
                onclick: move |_| menu.write().close_drawer(),
            }
            aside { class: "drawer",
                div { class: "drawer-header",
                    Link {
                        to: Route::Home {},
                        onclick: move |_| menu.write().close_drawer(),
                        img { src: assets::NAV_LOGO, alt: catalog::VENDOR }
                    }
                    button {
                        class: "nav-toggle",
                        aria_label: "Close navigation menu",
                        onclick: move |_| menu.write().close_drawer(),
                        svg {
                            width: "24",
                            height: "24",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            path { d: "M6 18L18 6M6 6l12 12" }
                        }
                    }
                }
                nav { class: "drawer-links",
                    for category in CATEGORIES.iter() {
                        Link {
                            class: "drawer-link",
                            key: "{category.id}",
                            to: Route::CategoryDetail { category_id: category.id.to_string() },
                            onclick: move |_| menu.write().close_drawer(),
                            "{category.title}"
                        }
                    }
                    a {
                        class: "drawer-link",
                        href: "/#about",
                        onclick: move |_| menu.write().close_drawer(),
                        "About"
                    }
                }
                div { class: "drawer-cta",
                    Link {
                        class: "btn btn-primary",
                        to: Route::Contact {},
                        onclick: move |_| menu.write().close_drawer(),
                        "Contact Us"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
        Footer {}
    }
}

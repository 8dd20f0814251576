use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::Event;
use yew::prelude::*;

use deckview_core::MenuVisibility;

use crate::dom::now_ms;

const ACTIVITY_EVENTS: [&str; 2] = ["mousemove", "touchstart"];

/// Shows the control bar on pointer activity and hides it after `quiet_ms`
/// without any.
#[hook]
pub(crate) fn use_menu_visibility(quiet_ms: u32) -> bool {
    let visible = use_state(|| true);
    let menu = use_mut_ref(|| MenuVisibility::new(f64::from(quiet_ms)));
    {
        let visible = visible.clone();
        let menu = menu.clone();
        use_effect_with(quiet_ms, move |quiet_ms| {
            let quiet_ms = *quiet_ms;
            let hide_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let listeners: Vec<EventListener> = match web_sys::window() {
                Some(window) => ACTIVITY_EVENTS
                    .iter()
                    .map(|name| {
                        let visible = visible.clone();
                        let menu = menu.clone();
                        let hide_timer = hide_timer.clone();
                        EventListener::new(&window, *name, move |_event: &Event| {
                            if menu.borrow_mut().activity(now_ms()) {
                                visible.set(true);
                            }
                            let visible = visible.clone();
                            let menu = menu.clone();
                            // replacing the handle cancels the previous timer
                            *hide_timer.borrow_mut() = Some(Timeout::new(quiet_ms, move || {
                                if menu.borrow_mut().timer_fired() {
                                    visible.set(false);
                                }
                            }));
                        })
                    })
                    .collect(),
                None => Vec::new(),
            };
            move || {
                drop(listeners);
                hide_timer.borrow_mut().take();
                menu.borrow_mut().cancel();
            }
        });
    }
    *visible
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct MenuStateProps {
        quiet_ms: u32,
    }

    #[function_component(MenuState)]
    fn menu_state(props: &MenuStateProps) -> Html {
        let visible = use_menu_visibility(props.quiet_ms);
        html! {
            <span class="menu-state">{ if visible { "shown" } else { "hidden" } }</span>
        }
    }

    fn move_pointer() {
        let window = web_sys::window().unwrap();
        let event = Event::new("mousemove").unwrap();
        window.dispatch_event(&event).unwrap();
    }

    fn state(host: &web_sys::Element) -> String {
        host.query_selector(".menu-state")
            .unwrap()
            .and_then(|node| node.text_content())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test(async)]
    async fn activity_within_quiet_period_keeps_menu_shown() {
        set_panic_hook();
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_id("menu-state-root");
        document.body().unwrap().append_child(&host).unwrap();
        yew::Renderer::<MenuState>::with_root_and_props(
            host.clone(),
            MenuStateProps { quiet_ms: 200 },
        )
        .render();
        TimeoutFuture::new(20).await;
        assert_eq!(state(&host), "shown");

        move_pointer();
        TimeoutFuture::new(120).await;
        move_pointer();
        // past the first deadline, inside the second
        TimeoutFuture::new(120).await;
        assert_eq!(state(&host), "shown");

        TimeoutFuture::new(200).await;
        assert_eq!(state(&host), "hidden");

        move_pointer();
        TimeoutFuture::new(20).await;
        assert_eq!(state(&host), "shown");
    }
}

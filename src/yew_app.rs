use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

use deckview_core::{publish_change, Deck, PageChange, SurfaceSlot, SyncMessage};

use crate::app_router::{location_page, open_presenter_window, sync_location_to_page};
use crate::app_runtime::init_config;
use crate::dom::now_ms;
use crate::fullscreen::toggle_fullscreen;
use crate::menu_runtime::use_menu_visibility;
use crate::metadata_loader::use_metadata;
use crate::presenter::PresenterView;
use crate::render_surface::SlideStack;
use crate::slide_channel::SlideChannel;

type SharedDeck = Rc<RefCell<Deck>>;
type SharedChannel = Rc<RefCell<Option<SlideChannel>>>;

/// Reflects a deck change into the page: location fragment, sync channel,
/// transition release and the rendered page.
fn change_handler(
    deck: SharedDeck,
    channel: SharedChannel,
    transition_timer: Rc<RefCell<Option<Timeout>>>,
    page: UseStateHandle<u32>,
    transition_ms: u32,
) -> Callback<PageChange> {
    Callback::from(move |change: PageChange| {
        sync_location_to_page(change.page);
        if let Some(channel) = channel.borrow().as_ref() {
            publish_change(channel, &change);
        }
        if change.transition {
            let deck = deck.clone();
            *transition_timer.borrow_mut() = Some(Timeout::new(transition_ms, move || {
                deck.borrow_mut().release_transition();
            }));
        }
        page.set(change.page);
    })
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let init = use_memo((), |_| init_config());
    let viewer = &init.viewer;
    let load_state = use_metadata(&viewer.metadata_url);
    let metadata = load_state.metadata();
    let deck: SharedDeck = {
        let settings = viewer.deck_settings();
        use_mut_ref(move || Deck::new(settings, location_page()))
    };
    let page = use_state(|| deck.borrow().current_page());
    let page_count = use_state(|| 0u32);
    let channel: SharedChannel = use_mut_ref(|| None);
    let transition_timer = use_mut_ref(|| None::<Timeout>);
    let menu_visible = use_menu_visibility(viewer.menu_quiet_ms);

    let on_change = change_handler(
        deck.clone(),
        channel.clone(),
        transition_timer.clone(),
        page.clone(),
        viewer.transition_ms,
    );

    {
        let deck = deck.clone();
        let page = page.clone();
        let page_count = page_count.clone();
        let on_change = on_change.clone();
        let ready_count = metadata.as_ref().map(|metadata| metadata.page_count);
        use_effect_with(ready_count, move |ready_count| {
            if let Some(count) = *ready_count {
                let change = deck.borrow_mut().metadata_ready(count, location_page());
                page_count.set(count);
                match change {
                    Some(change) => on_change.emit(change),
                    None => page.set(deck.borrow().current_page()),
                }
            }
            || ()
        });
    }

    {
        let deck = deck.clone();
        let channel = channel.clone();
        let on_change = on_change.clone();
        let sync = viewer
            .cross_window_sync
            .then(|| viewer.channel_name.clone());
        use_effect_with(sync, move |sync| {
            if let Some(name) = sync.as_ref() {
                let on_message: Rc<dyn Fn(SyncMessage)> = Rc::new(move |message: SyncMessage| {
                    let change = deck.borrow_mut().apply_remote(&message);
                    if let Some(change) = change {
                        on_change.emit(change);
                    }
                });
                *channel.borrow_mut() = SlideChannel::open(name, on_message);
            }
            move || {
                channel.borrow_mut().take();
            }
        });
    }

    {
        let deck = deck.clone();
        let on_change = on_change.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "keydown", move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let change = deck.borrow_mut().key_down(&event.code(), now_ms());
                    if let Some(change) = change {
                        on_change.emit(change);
                    }
                })
            });
            || drop(listener)
        });
    }

    {
        let deck = deck.clone();
        let on_change = on_change.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "hashchange", move |_event: &Event| {
                    let change = deck.borrow_mut().location_changed(location_page());
                    if let Some(change) = change {
                        on_change.emit(change);
                    }
                })
            });
            || drop(listener)
        });
    }

    {
        let transition_timer = transition_timer.clone();
        use_effect_with((), move |_| {
            move || {
                transition_timer.borrow_mut().take();
            }
        });
    }

    let on_previous = {
        let deck = deck.clone();
        let on_change = on_change.clone();
        Callback::from(move |_: ()| {
            let change = deck.borrow_mut().previous_page();
            if let Some(change) = change {
                on_change.emit(change);
            }
        })
    };
    let on_next = {
        let deck = deck.clone();
        let on_change = on_change.clone();
        Callback::from(move |_: ()| {
            let change = deck.borrow_mut().next_page();
            if let Some(change) = change {
                on_change.emit(change);
            }
        })
    };

    let current_page = *page;
    let total = *page_count;
    let (at_first, at_last) = {
        let deck = deck.borrow();
        let navigation = deck.navigation();
        (
            navigation.is_first(),
            !navigation.is_ready() || navigation.is_last(),
        )
    };
    let pages_dir = AttrValue::from(viewer.pages_dir.clone());

    if init.mode.is_presenter() {
        let notes = metadata
            .as_ref()
            .and_then(|metadata| metadata.speaker_notes(current_page))
            .map(|notes| AttrValue::from(notes.to_string()));
        return html! {
            <PresenterView
                pages_dir={pages_dir}
                page_count={total}
                current_page={current_page}
                notes={notes}
                clock_tick_ms={viewer.clock_tick_ms}
                at_first={at_first}
                at_last={at_last}
                on_previous={on_previous}
                on_next={on_next}
            />
        };
    }

    let page_label = if total == 0 {
        format!("Page {current_page}")
    } else {
        format!("Page {current_page} of {total}")
    };
    let menu_style = if menu_visible {
        "opacity:1;pointer-events:auto;"
    } else {
        "opacity:0;pointer-events:none;"
    };
    let on_prev_click = on_previous.reform(|_: MouseEvent| ());
    let on_next_click = on_next.reform(|_: MouseEvent| ());
    let on_fullscreen = Callback::from(|_: MouseEvent| toggle_fullscreen());
    let on_presenter = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| open_presenter_window(*page))
    };

    html! {
        <div class="deck" style="position:relative;width:100vw;height:100vh;overflow:hidden;">
            <SlideStack
                pages_dir={pages_dir}
                page_count={total}
                current_page={current_page}
                slot={SurfaceSlot::Current}
            />
            <div
                class={classes!("menu", (!menu_visible).then_some("hidden"))}
                style={format!("position:absolute;left:50%;bottom:1rem;transform:translateX(-50%);\
                    display:flex;gap:0.5rem;align-items:center;transition:opacity 0.3s;{menu_style}")}
            >
                <button
                    class={classes!("nav-prev", at_first.then_some("disabled"))}
                    disabled={at_first}
                    onclick={on_prev_click}
                >
                    { "Previous" }
                </button>
                <span class="page-label">{ page_label }</span>
                <button
                    class={classes!("nav-next", at_last.then_some("disabled"))}
                    disabled={at_last}
                    onclick={on_next_click}
                >
                    { "Next" }
                </button>
                <button class="fullscreen" onclick={on_fullscreen}>{ "Fullscreen" }</button>
                <button class="open-presenter" onclick={on_presenter}>{ "Presenter" }</button>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test(async)]
    async fn renders_menu_without_slides_before_metadata() {
        set_panic_hook();
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_id("app-root");
        document.body().unwrap().append_child(&host).unwrap();
        yew::Renderer::<App>::with_root(host.clone()).render();
        TimeoutFuture::new(20).await;

        assert_eq!(host.query_selector_all("img").unwrap().length(), 0);
        let label = host
            .query_selector(".page-label")
            .unwrap()
            .and_then(|node| node.text_content())
            .unwrap_or_default();
        assert!(label.starts_with("Page "));
        assert!(host.query_selector(".nav-next[disabled]").unwrap().is_some());
    }
}

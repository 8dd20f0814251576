use gloo::timers::callback::Interval;
use yew::prelude::*;

use deckview_core::{PresenterClock, SurfaceSlot};

use crate::render_surface::SlideStack;

const NO_NOTES: &str = "No speaker notes for this slide.";

/// Elapsed presenting time as `HH:MM:SS`, plus a reset callback. The interval
/// keeps running across resets and stops on unmount.
#[hook]
pub(crate) fn use_presenter_clock(tick_ms: u32) -> (String, Callback<MouseEvent>) {
    let clock = use_state(PresenterClock::new);
    let clock_live = use_mut_ref(PresenterClock::new);
    {
        let clock = clock.clone();
        let clock_live = clock_live.clone();
        use_effect_with(tick_ms, move |tick_ms| {
            let interval = Interval::new(*tick_ms, move || {
                let snapshot = {
                    let mut live = clock_live.borrow_mut();
                    live.tick();
                    *live
                };
                clock.set(snapshot);
            });
            move || drop(interval)
        });
    }
    let on_reset = {
        let clock = clock.clone();
        let clock_live = clock_live.clone();
        Callback::from(move |_: MouseEvent| {
            clock_live.borrow_mut().reset();
            clock.set(PresenterClock::new());
        })
    };
    (clock.display(), on_reset)
}

#[derive(Properties, PartialEq)]
pub(crate) struct PresenterViewProps {
    pub(crate) pages_dir: AttrValue,
    /// Zero until metadata is ready.
    pub(crate) page_count: u32,
    pub(crate) current_page: u32,
    pub(crate) notes: Option<AttrValue>,
    pub(crate) clock_tick_ms: u32,
    pub(crate) at_first: bool,
    /// Also set while metadata is missing.
    pub(crate) at_last: bool,
    pub(crate) on_previous: Callback<()>,
    pub(crate) on_next: Callback<()>,
}

#[function_component(PresenterView)]
pub(crate) fn presenter_view(props: &PresenterViewProps) -> Html {
    let (elapsed, on_reset) = use_presenter_clock(props.clock_tick_ms);
    let at_first = props.at_first;
    let at_last = props.at_last;
    let on_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| on_previous.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };
    let notes = match props.notes.as_ref() {
        Some(notes) => html! { <div class="notes-text">{ notes.clone() }</div> },
        None => html! { <div class="notes-empty">{ NO_NOTES }</div> },
    };
    html! {
        <div class="presenter" style="display:flex;flex-direction:column;width:100vw;height:100vh;">
            <div class="presenter-slides" style="display:flex;flex:1;gap:1rem;min-height:0;">
                <div class="presenter-current" style="flex:2;">
                    <SlideStack
                        pages_dir={props.pages_dir.clone()}
                        page_count={props.page_count}
                        current_page={props.current_page}
                        slot={SurfaceSlot::Current}
                    />
                </div>
                <div class="presenter-next" style="flex:1;">
                    <SlideStack
                        pages_dir={props.pages_dir.clone()}
                        page_count={props.page_count}
                        current_page={props.current_page}
                        slot={SurfaceSlot::LookAhead}
                    />
                </div>
            </div>
            <div class="presenter-notes" style="flex:0 0 25%;overflow:auto;white-space:pre-wrap;">
                { notes }
            </div>
            <div class="presenter-footer" style="display:flex;align-items:center;gap:1rem;">
                <span class="presenter-clock">{ elapsed }</span>
                <button class="presenter-reset" onclick={on_reset}>{ "Reset" }</button>
                <div class="presenter-pager" style="margin-left:auto;display:flex;gap:0.5rem;">
                    <button
                        class={classes!("nav-prev", at_first.then_some("disabled"))}
                        disabled={at_first}
                        onclick={on_previous}
                    >
                        { "Previous" }
                    </button>
                    <span class="page-label">
                        { format!("Page {} of {}", props.current_page, props.page_count) }
                    </span>
                    <button
                        class={classes!("nav-next", at_last.then_some("disabled"))}
                        disabled={at_last}
                        onclick={on_next}
                    >
                        { "Next" }
                    </button>
                </div>
            </div>
        </div>
    }
}

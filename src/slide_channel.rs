use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{BroadcastChannel, MessageEvent};

use deckview_core::{decode, encode, SyncMessage, SyncTransport};

use crate::dom::js_err;

/// BroadcastChannel link between views of the same deck.
///
/// The channel is closed by `close` or on drop.
pub(crate) struct SlideChannel {
    channel: BroadcastChannel,
    onmessage: Option<Closure<dyn FnMut(MessageEvent)>>,
}

impl SlideChannel {
    pub(crate) fn open(name: &str, on_message: Rc<dyn Fn(SyncMessage)>) -> Option<Self> {
        let channel = match BroadcastChannel::new(name) {
            Ok(channel) => channel,
            Err(err) => {
                gloo::console::warn!("failed to open slide channel", name, js_err(err));
                return None;
            }
        };
        let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
            match read_message(&event) {
                Some(message) => on_message(message),
                None => gloo::console::warn!("dropping malformed slide message"),
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        channel.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        gloo::console::log!("slide channel open", name);
        Some(Self {
            channel,
            onmessage: Some(onmessage),
        })
    }

    pub(crate) fn is_open(&self) -> bool {
        self.onmessage.is_some()
    }

    pub(crate) fn close(&mut self) {
        if self.onmessage.take().is_none() {
            return;
        }
        self.channel.set_onmessage(None);
        self.channel.close();
        gloo::console::log!("slide channel closed", self.channel.name());
    }
}

impl SyncTransport for SlideChannel {
    fn publish(&self, message: &SyncMessage) {
        if !self.is_open() {
            return;
        }
        let Some(raw) = encode(message) else {
            return;
        };
        // post a plain object so views built from other code can read it
        let payload = match js_sys::JSON::parse(&raw) {
            Ok(payload) => payload,
            Err(err) => {
                gloo::console::warn!("failed to build slide message", js_err(err));
                return;
            }
        };
        if let Err(err) = self.channel.post_message(&payload) {
            gloo::console::warn!("failed to post slide message", js_err(err));
        }
    }
}

impl Drop for SlideChannel {
    fn drop(&mut self) {
        self.close();
    }
}

fn read_message(event: &MessageEvent) -> Option<SyncMessage> {
    let raw = js_sys::JSON::stringify(&event.data()).ok()?.as_string()?;
    decode::<SyncMessage>(&raw)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test(async)]
    async fn message_reaches_other_channel() {
        set_panic_hook();
        let received = Rc::new(Cell::new(0u32));
        let sender = SlideChannel::open("deckview-test-a", Rc::new(|_: SyncMessage| {})).expect("sender");
        let received_for_cb = received.clone();
        let _receiver = SlideChannel::open(
            "deckview-test-a",
            Rc::new(move |message: SyncMessage| received_for_cb.set(message.current_page)),
        )
        .expect("receiver");

        sender.publish(&SyncMessage::new(5));
        assert_eq!(received.get(), 0, "delivery is never synchronous");
        TimeoutFuture::new(50).await;
        assert_eq!(received.get(), 5);
    }

    #[wasm_bindgen_test(async)]
    async fn closed_channel_stops_delivery() {
        set_panic_hook();
        let received = Rc::new(Cell::new(0u32));
        let sender = SlideChannel::open("deckview-test-b", Rc::new(|_: SyncMessage| {})).expect("sender");
        let received_for_cb = received.clone();
        let mut receiver = SlideChannel::open(
            "deckview-test-b",
            Rc::new(move |message: SyncMessage| received_for_cb.set(message.current_page)),
        )
        .expect("receiver");
        receiver.close();
        assert!(!receiver.is_open());

        sender.publish(&SyncMessage::new(3));
        TimeoutFuture::new(50).await;
        assert_eq!(received.get(), 0);
    }
}

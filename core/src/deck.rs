use crate::keys::{direction_for_key, PageDirection};
use crate::navigation::NavigationState;
use crate::protocol::SyncMessage;
use crate::throttle::{KeyThrottle, TransitionLock};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckSettings {
    /// Minimum spacing of accepted key presses; `None` disables the throttle.
    pub key_throttle_ms: Option<f64>,
    pub transition_lock: bool,
}

/// What caused a page change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSource {
    /// Button, key press or metadata reconciliation in this view.
    Local,
    /// The location fragment was edited or history moved.
    Location,
    /// Another view announced its page on the sync channel.
    Remote,
}

/// A page change the host has to reflect: update the location, publish when
/// asked, and release the transition lock after the transition when it was
/// engaged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageChange {
    pub page: u32,
    pub source: PageSource,
    pub publish: bool,
    pub transition: bool,
}

/// Presentation state of one view: navigation plus the input gates around it.
#[derive(Clone, Debug)]
pub struct Deck {
    navigation: NavigationState,
    key_throttle: Option<KeyThrottle>,
    transition_lock: Option<TransitionLock>,
}

impl Deck {
    pub fn new(settings: DeckSettings, location_page: u32) -> Self {
        Self {
            navigation: NavigationState::new(location_page),
            key_throttle: settings.key_throttle_ms.map(KeyThrottle::new),
            transition_lock: settings.transition_lock.then(TransitionLock::default),
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn current_page(&self) -> u32 {
        self.navigation.current_page()
    }

    pub fn page_count(&self) -> Option<u32> {
        self.navigation.page_count()
    }

    pub fn is_ready(&self) -> bool {
        self.navigation.is_ready()
    }

    pub fn transition_active(&self) -> bool {
        self.transition_lock
            .as_ref()
            .is_some_and(TransitionLock::is_engaged)
    }

    /// Metadata arrived: bound the deck and reconcile with the location.
    pub fn metadata_ready(&mut self, page_count: u32, location_page: u32) -> Option<PageChange> {
        self.navigation
            .set_page_count(page_count, location_page)
            .then(|| self.change(PageSource::Local, false))
    }

    pub fn go_to_page(&mut self, page: i64) -> Option<PageChange> {
        if !self.is_ready() || self.transition_active() {
            return None;
        }
        let changed = self.navigation.go_to_page(page);
        self.finish_local(changed)
    }

    pub fn previous_page(&mut self) -> Option<PageChange> {
        self.step(PageDirection::Previous)
    }

    pub fn next_page(&mut self) -> Option<PageChange> {
        self.step(PageDirection::Next)
    }

    /// Handles a key press identified by `KeyboardEvent.code`.
    ///
    /// The throttle window is stamped by every press that gets through it,
    /// including keys that do not page and presses before metadata is ready:
    /// the window runs from the last keydown let through, not the last page
    /// change.
    pub fn key_down(&mut self, code: &str, now_ms: f64) -> Option<PageChange> {
        if let Some(throttle) = self.key_throttle.as_mut() {
            if !throttle.try_accept(now_ms) {
                return None;
            }
        }
        if !self.is_ready() {
            return None;
        }
        self.step(direction_for_key(code)?)
    }

    /// The location fragment changed outside of this deck.
    pub fn location_changed(&mut self, location_page: u32) -> Option<PageChange> {
        if !self.is_ready() {
            return None;
        }
        self.navigation
            .go_to_page(i64::from(location_page))
            .then(|| self.change(PageSource::Location, false))
    }

    /// Applies a message from another view. Never asks to republish.
    pub fn apply_remote(&mut self, message: &SyncMessage) -> Option<PageChange> {
        let page = message.page()?;
        self.navigation
            .adopt(page)
            .then(|| self.change(PageSource::Remote, false))
    }

    pub fn release_transition(&mut self) {
        if let Some(lock) = self.transition_lock.as_mut() {
            lock.release();
        }
    }

    fn step(&mut self, direction: PageDirection) -> Option<PageChange> {
        if !self.is_ready() || self.transition_active() {
            return None;
        }
        let changed = match direction {
            PageDirection::Previous => self.navigation.previous_page(),
            PageDirection::Next => self.navigation.next_page(),
        };
        self.finish_local(changed)
    }

    fn finish_local(&mut self, changed: bool) -> Option<PageChange> {
        if !changed {
            return None;
        }
        let transition = self
            .transition_lock
            .as_mut()
            .is_some_and(TransitionLock::try_engage);
        Some(self.change(PageSource::Local, transition))
    }

    fn change(&self, source: PageSource, transition: bool) -> PageChange {
        PageChange {
            page: self.current_page(),
            source,
            publish: source != PageSource::Remote,
            transition,
        }
    }
}

pub mod clock;
pub mod codec;
pub mod config;
pub mod deck;
pub mod keys;
pub mod menu;
pub mod metadata;
pub mod navigation;
pub mod page;
pub mod protocol;
pub mod surface;
pub mod sync;
pub mod throttle;

pub use clock::{format_elapsed, PresenterClock};
pub use codec::{decode, encode};
pub use config::{presenter_url, LaunchMode, ViewerConfig};
pub use deck::{Deck, DeckSettings, PageChange, PageSource};
pub use keys::{direction_for_key, PageDirection};
pub use menu::MenuVisibility;
pub use metadata::{Metadata, MetadataError, SlideMeta};
pub use navigation::NavigationState;
pub use page::{clamp_page, hash_for_page, look_ahead_page, page_from_location, FIRST_PAGE};
pub use protocol::{SyncMessage, SLIDE_CHANNEL_NAME};
pub use surface::{page_image_src, page_numbers, SurfaceSlot};
pub use sync::{publish_change, BusEndpoint, LocalBus, SyncTransport};
pub use throttle::{KeyThrottle, TransitionLock};

use std::cell::RefCell;

use crate::app_router::{self, InitConfig};

thread_local! {
    static INIT_CONFIG: RefCell<Option<InitConfig>> = RefCell::new(None);
}

pub(crate) fn init_config() -> InitConfig {
    INIT_CONFIG.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(app_router::load_init_config)
            .clone()
    })
}

use std::rc::Rc;

use folio::{EmailJsRelay, Notifier, Relay, SiteConfig};

use super::notify::AlertNotifier;

#[derive(Clone)]
pub struct GlobalState {
    pub site: Rc<SiteConfig>,
    pub relay: Rc<dyn Relay>,
    pub notifier: Rc<dyn Notifier>,
}

impl GlobalState {
    pub fn new(site: SiteConfig) -> Self {
        let relay = EmailJsRelay::new(site.relay.clone());
        Self::with_handlers(site, Rc::new(relay), Rc::new(AlertNotifier))
    }

    pub fn with_handlers(
        site: SiteConfig,
        relay: Rc<dyn Relay>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            site: Rc::new(site),
            relay,
            notifier,
        }
    }
}

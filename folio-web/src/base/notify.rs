use folio::{Notice, Notifier};
use leptos::logging::{error, log};

/// Shows submission results as a blocking browser alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: Notice) {
        log!("Contact form notice: {:?}", notice);
        let Some(window) = web_sys::window() else {
            error!("No window available to show: {}", notice.text());
            return;
        };
        if let Err(err) = window.alert_with_message(notice.text()) {
            error!("Failed to show notice: {:?}", err);
        }
    }
}

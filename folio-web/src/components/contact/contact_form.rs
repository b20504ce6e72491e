use std::future::Future;
use std::rc::Rc;

use folio::{
    deliver, ContactField, ContactFormState, Notifier, Relay, RelayConfig,
};
use leptos::ev::{Event, SubmitEvent};
use leptos::logging::{error, log};
use leptos::*;

use crate::components::buttons::FormButton;
use crate::vars::INPUT_CLASS;
use crate::GlobalState;

/// Starts a submission of the current form contents. Returns the delivery
/// task to spawn, or `None` when a submission is already in flight.
pub fn submit_contact(
    form: RwSignal<ContactFormState>,
    relay_config: &RelayConfig,
    relay: Rc<dyn Relay>,
    notifier: Rc<dyn Notifier>,
) -> Option<impl Future<Output = ()>> {
    let payload = form
        .try_update(|state| state.begin_submit(relay_config))
        .flatten()?;
    log!("Sending contact message");

    Some(async move {
        let outcome =
            deliver(relay.as_ref(), notifier.as_ref(), &payload).await;
        form.update(|state| state.complete(&outcome));
    })
}

fn handle_change(form: RwSignal<ContactFormState>, ev: &Event) {
    let name = event_target::<web_sys::Element>(ev)
        .get_attribute("name")
        .unwrap_or_default();
    match name.parse::<ContactField>() {
        Ok(field) => {
            let value = event_target_value(ev);
            form.update(|state| state.set_field(field, value));
        }
        Err(()) => error!("Input event from unknown field: {}", name),
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let state = use_context::<GlobalState>()
        .expect("state to have been provided");
    let relay_config = state.site.relay.clone();
    let GlobalState {
        relay, notifier, ..
    } = state;

    let form = create_rw_signal(ContactFormState::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match submit_contact(
            form,
            &relay_config,
            Rc::clone(&relay),
            Rc::clone(&notifier),
        ) {
            Some(task) => spawn_local(task),
            None => log!("Contact message is already being sent"),
        }
    };
    let on_input = move |ev: Event| handle_change(form, &ev);
    let value_of = move |field: ContactField| {
        move || form.with(|state| state.field(field).to_string())
    };

    view! {
        <form on:submit=on_submit class="mt-8 flex flex-col gap-6">
            <div class="flex flex-col gap-4">
                <label class="flex flex-col gap-2">
                    <span class="text-white font-medium">"Your Name"</span>
                    <input
                        type="text"
                        name=ContactField::Name.input_name()
                        prop:value=value_of(ContactField::Name)
                        on:input=on_input
                        placeholder="What's your name?"
                        class=INPUT_CLASS
                        required=true
                    />
                </label>

                <label class="flex flex-col gap-2">
                    <span class="text-white font-medium">"Your Email"</span>
                    <input
                        type="email"
                        name=ContactField::Email.input_name()
                        prop:value=value_of(ContactField::Email)
                        on:input=on_input
                        placeholder="What's your email?"
                        class=INPUT_CLASS
                        required=true
                    />
                </label>

                <label class="flex flex-col gap-2">
                    <span class="text-white font-medium">"Your Message"</span>
                    <textarea
                        rows=5
                        name=ContactField::Message.input_name()
                        prop:value=value_of(ContactField::Message)
                        on:input=on_input
                        placeholder="How can I help you?"
                        class=format!("{} resize-none", INPUT_CLASS)
                        required=true
                    />
                </label>
            </div>

            {move || {
                let (enabled, label) = form
                    .with(|state| (state.can_submit(), state.submit_label()));
                FormButton::new(label).set_enabled(enabled).into_view()
            }}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use folio::{EmailPayload, Notice, RelayError, RelayFuture};
    use futures::executor::block_on;

    use super::*;

    struct RecordingRelay {
        sent: RefCell<Vec<EmailPayload>>,
        fail: bool,
    }

    impl Relay for RecordingRelay {
        fn send<'a>(&'a self, payload: &'a EmailPayload) -> RelayFuture<'a> {
            self.sent.borrow_mut().push(payload.clone());
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    Err(RelayError::Rejected {
                        status: 412,
                        body: "template not found".to_string(),
                    })
                } else {
                    Ok(())
                }
            })
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        shown: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.shown.borrow_mut().push(notice);
        }
    }

    fn relay_config() -> RelayConfig {
        RelayConfig {
            endpoint: "https://relay.example.com/send".to_string(),
            service_id: "service_a".to_string(),
            template_id: "template_a".to_string(),
            public_key: "key_a".to_string(),
            to_name: "Timothy".to_string(),
            to_email: "owner@example.com".to_string(),
        }
    }

    fn fill(form: RwSignal<ContactFormState>) {
        form.update(|state| {
            state.set_field(ContactField::Name, "Ada".to_string());
            state.set_field(ContactField::Email, "ada@example.com".to_string());
            state.set_field(ContactField::Message, "Hi".to_string());
        });
    }

    #[test]
    fn test_submit_success_resets_form() {
        let runtime = create_runtime();
        let form = create_rw_signal(ContactFormState::new());
        fill(form);

        let relay = Rc::new(RecordingRelay {
            sent: RefCell::new(Vec::new()),
            fail: false,
        });
        let notifier = Rc::new(RecordingNotifier::default());

        let task = submit_contact(
            form,
            &relay_config(),
            relay.clone(),
            notifier.clone(),
        )
        .unwrap();
        assert!(form.get_untracked().is_submitting());

        // the button is disabled, a second submit must not start a request
        assert!(submit_contact(
            form,
            &relay_config(),
            relay.clone(),
            notifier.clone()
        )
        .is_none());

        block_on(task);

        assert_eq!(relay.sent.borrow().len(), 1);
        assert_eq!(relay.sent.borrow()[0].from_name, "Ada");
        assert_eq!(relay.sent.borrow()[0].from_email, "ada@example.com");
        assert_eq!(relay.sent.borrow()[0].message, "Hi");
        assert_eq!(*notifier.shown.borrow(), vec![Notice::Delivered]);
        assert_eq!(form.get_untracked(), ContactFormState::new());

        runtime.dispose();
    }

    #[test]
    fn test_submit_failure_keeps_fields() {
        let runtime = create_runtime();
        let form = create_rw_signal(ContactFormState::new());
        fill(form);
        let before = form.get_untracked();

        let relay = Rc::new(RecordingRelay {
            sent: RefCell::new(Vec::new()),
            fail: true,
        });
        let notifier = Rc::new(RecordingNotifier::default());

        let task =
            submit_contact(form, &relay_config(), relay.clone(), notifier.clone())
                .unwrap();
        block_on(task);

        assert_eq!(relay.sent.borrow().len(), 1);
        assert_eq!(*notifier.shown.borrow(), vec![Notice::Failed]);
        assert!(!form.get_untracked().is_submitting());
        assert_eq!(form.get_untracked(), before);

        runtime.dispose();
    }
}

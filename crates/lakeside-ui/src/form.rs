//! Contact form submission interceptor.

/// Id of the form the page wires the interceptor to.
pub const CONTACT_FORM_ID: &str = "contact-form";

/// Message shown once per intercepted submission.
pub const SUBMIT_ACKNOWLEDGEMENT: &str = "Thanks! Your message has been received.";

/// Surfaces a one-shot message to the user.
pub trait Acknowledge {
    fn acknowledge(&mut self, message: &str);
}

/// A pending form submission. The host performs the default submit action
/// only if nobody called [`SubmitEvent::prevent_default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    form_id: String,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            default_prevented: false,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Swallows submissions of one form and acknowledges them instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInterceptor {
    form_id: String,
}

impl FormInterceptor {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
        }
    }

    /// Returns whether the event belonged to this form and was intercepted.
    pub fn handle<A: Acknowledge + ?Sized>(&self, event: &mut SubmitEvent, ack: &mut A) -> bool {
        if event.form_id() != self.form_id {
            return false;
        }
        event.prevent_default();
        ack.acknowledge(SUBMIT_ACKNOWLEDGEMENT);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Acknowledge for Recorder {
        fn acknowledge(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    #[test]
    fn test_intercepts_designated_form() {
        let interceptor = FormInterceptor::new(CONTACT_FORM_ID);
        let mut recorder = Recorder::default();
        let mut event = SubmitEvent::new("contact-form");

        assert!(interceptor.handle(&mut event, &mut recorder));
        assert!(event.default_prevented());
        assert_eq!(recorder.0, vec![SUBMIT_ACKNOWLEDGEMENT.to_string()]);
    }

    #[test]
    fn test_acknowledges_once_per_submission() {
        let interceptor = FormInterceptor::new(CONTACT_FORM_ID);
        let mut recorder = Recorder::default();
        for _ in 0..3 {
            let mut event = SubmitEvent::new(CONTACT_FORM_ID);
            interceptor.handle(&mut event, &mut recorder);
            assert!(event.default_prevented());
        }
        assert_eq!(recorder.0.len(), 3);
    }

    #[test]
    fn test_ignores_other_forms() {
        let interceptor = FormInterceptor::new(CONTACT_FORM_ID);
        let mut recorder = Recorder::default();
        let mut event = SubmitEvent::new("newsletter");

        assert!(!interceptor.handle(&mut event, &mut recorder));
        assert!(!event.default_prevented());
        assert!(recorder.0.is_empty());
    }
}

use std::rc::Rc;

use yew::prelude::*;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::config;
use crate::subscribe::{self, Subscription};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("required field is missing")]
    MissingRequiredField,
    #[error("value is not in the expected format")]
    InvalidFormat,
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::MissingRequiredField)
    } else if !EMAIL_PATTERN.is_match(value) {
        Err(FieldError::InvalidFormat)
    } else {
        Ok(())
    }
}

pub fn validate_consent(checked: bool) -> Result<(), FieldError> {
    if checked {
        Ok(())
    } else {
        Err(FieldError::MissingRequiredField)
    }
}

/// Validated fields of the form, in focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Consent,
}

impl Field {
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Email => "nl-email",
            Field::Consent => "nl-consent",
        }
    }

    pub fn error_id(self) -> &'static str {
        match self {
            Field::Email => "nl-email-error",
            Field::Consent => "nl-consent-error",
        }
    }

    pub fn message(self, error: FieldError) -> &'static str {
        match (self, error) {
            (Field::Email, FieldError::MissingRequiredField) => "Email address is required.",
            (Field::Email, FieldError::InvalidFormat) => "Please enter a valid email address.",
            (Field::Consent, _) => "You must agree to receive emails to continue.",
        }
    }
}

/// Error display for one field. The message and the error class are derived
/// from the same value so they cannot disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldState {
    field: Field,
    error: Option<FieldError>,
}

impl FieldState {
    pub fn new(field: Field) -> Self {
        Self { field, error: None }
    }

    pub fn record(&mut self, result: Result<(), FieldError>) {
        self.error = result.err();
    }

    pub fn clear(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn message(&self) -> &'static str {
        self.error.map_or("", |error| self.field.message(error))
    }

    pub fn class(&self) -> Option<&'static str> {
        self.has_error().then_some("error")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Subscription),
    /// Submission cancelled; focus goes to the first field in error.
    Rejected { focus: Field },
    AlreadySubmitted,
}

pub enum NewsletterAction {
    Name(String),
    Email(String),
    BlurEmail,
    Consent(bool),
    Submit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsletterState {
    pub name: String,
    pub email: String,
    pub consent: bool,
    pub email_field: FieldState,
    pub consent_field: FieldState,
    pub submitted: bool,
    /// Bumped on every submit attempt so effects run once per attempt.
    pub attempts: u32,
    pub last_outcome: Option<SubmitOutcome>,
}

impl Default for NewsletterState {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            consent: false,
            email_field: FieldState::new(Field::Email),
            consent_field: FieldState::new(Field::Consent),
            submitted: false,
            attempts: 0,
            last_outcome: None,
        }
    }
}

impl Reducible for NewsletterState {
    type Action = NewsletterAction;

    fn reduce(self: Rc<Self>, action: NewsletterAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

impl NewsletterState {
    pub fn apply(&mut self, action: NewsletterAction) {
        match action {
            NewsletterAction::Name(value) => self.name = value,
            NewsletterAction::Email(value) => self.input_email(value),
            NewsletterAction::BlurEmail => self.blur_email(),
            NewsletterAction::Consent(checked) => self.consent = checked,
            NewsletterAction::Submit => {
                self.attempts += 1;
                let outcome = self.submit();
                self.last_outcome = Some(outcome);
            }
        }
    }

    pub fn blur_email(&mut self) {
        self.email_field.record(validate_email(&self.email));
    }

    /// Clears a showing email error as soon as the typed value is valid.
    /// Never raises a new error while typing.
    pub fn input_email(&mut self, value: String) {
        self.email = value;
        if self.email_field.has_error() && validate_email(&self.email).is_ok() {
            self.email_field.clear();
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.submitted {
            return SubmitOutcome::AlreadySubmitted;
        }

        self.email_field.record(validate_email(&self.email));
        self.consent_field.record(validate_consent(self.consent));

        let first_error = [&self.email_field, &self.consent_field]
            .into_iter()
            .find(|state| state.has_error())
            .map(|state| state.field);
        if let Some(focus) = first_error {
            return SubmitOutcome::Rejected { focus };
        }

        self.submitted = true;
        SubmitOutcome::Accepted(Subscription {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            consent: self.consent,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    #[prop_or_else(config::newsletter_endpoint)]
    pub endpoint: Option<&'static str>,
}

#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let form = use_reducer(NewsletterState::default);
    let email_ref = use_node_ref();
    let consent_ref = use_node_ref();
    let success_ref = use_node_ref();

    // Runs after the render that follows each submit attempt, so the success
    // region is already visible when it takes focus.
    {
        let outcome = form.last_outcome.clone();
        let errors = (form.email_field.error(), form.consent_field.error());
        let email_ref = email_ref.clone();
        let consent_ref = consent_ref.clone();
        let success_ref = success_ref.clone();
        let endpoint = props.endpoint;
        use_effect_with_deps(move |_| {
            match outcome {
                Some(SubmitOutcome::Accepted(subscription)) => {
                    info!(
                        "Newsletter form submitted: {}",
                        serde_json::to_string(&subscription).unwrap_or_default()
                    );
                    if let Some(success) = success_ref.cast::<HtmlElement>() {
                        let _ = success.focus();
                    }
                    if let Some(endpoint) = endpoint {
                        spawn_local(async move {
                            if let Err(err) = subscribe::send(endpoint, &subscription).await {
                                warn!("Newsletter signup was not delivered: {}", err);
                            }
                        });
                    }
                }
                Some(SubmitOutcome::Rejected { focus }) => {
                    debug!(
                        "newsletter submission cancelled (email: {:?}, consent: {:?})",
                        errors.0, errors.1
                    );
                    let target = match focus {
                        Field::Email => &email_ref,
                        Field::Consent => &consent_ref,
                    };
                    if let Some(input) = target.cast::<HtmlElement>() {
                        let _ = input.focus();
                    }
                }
                Some(SubmitOutcome::AlreadySubmitted) | None => {}
            }
            || ()
        }, form.attempts);
    }

    let on_name = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(NewsletterAction::Name(input.value()));
        })
    };

    let on_email = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(NewsletterAction::Email(input.value()));
        })
    };

    let on_email_blur = {
        let form = form.dispatcher();
        Callback::from(move |_: FocusEvent| {
            form.dispatch(NewsletterAction::BlurEmail);
        })
    };

    let on_consent = {
        let form = form.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(NewsletterAction::Consent(input.checked()));
        })
    };

    let onsubmit = {
        let form = form.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(NewsletterAction::Submit);
        })
    };

    let email_field = form.email_field;
    let consent_field = form.consent_field;

    html! {
        <>
            <form
                id="newsletter-form"
                class="newsletter-form"
                novalidate=true
                style={form.submitted.then_some("display: none;")}
                {onsubmit}
            >
                <div class="form-field">
                    <label for="nl-name">{"Name (optional)"}</label>
                    <input
                        id="nl-name"
                        name="name"
                        type="text"
                        autocomplete="name"
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                </div>

                <div class="form-field">
                    <label for={Field::Email.input_id()}>{"Email address"}</label>
                    <input
                        id={Field::Email.input_id()}
                        ref={email_ref}
                        name="email"
                        type="email"
                        autocomplete="email"
                        required=true
                        class={classes!(email_field.class())}
                        aria-describedby={Field::Email.error_id()}
                        aria-invalid={email_field.has_error().to_string()}
                        value={form.email.clone()}
                        oninput={on_email}
                        onblur={on_email_blur}
                    />
                    <p id={Field::Email.error_id()} class="field-error" aria-live="polite">
                        {email_field.message()}
                    </p>
                </div>

                <div class="form-field form-check">
                    <input
                        id={Field::Consent.input_id()}
                        ref={consent_ref}
                        name="consent"
                        type="checkbox"
                        required=true
                        class={classes!(consent_field.class())}
                        aria-describedby={Field::Consent.error_id()}
                        aria-invalid={consent_field.has_error().to_string()}
                        checked={form.consent}
                        onchange={on_consent}
                    />
                    <label for={Field::Consent.input_id()}>
                        {"I agree to receive news and event updates by email."}
                    </label>
                    <p id={Field::Consent.error_id()} class="field-error" aria-live="polite">
                        {consent_field.message()}
                    </p>
                </div>

                <button type="submit" class="btn btn-primary">{"Subscribe"}</button>
            </form>

            <div
                id="form-success"
                ref={success_ref}
                class="form-success"
                role="status"
                tabindex="-1"
                hidden={!form.submitted}
            >
                <h3>{"Thank you!"}</h3>
                <p>{"You're on the list. Watch your inbox for our next dispatch."}</p>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str, consent: bool) -> NewsletterState {
        let mut state = NewsletterState::default();
        state.input_email(email.to_string());
        state.consent = consent;
        state
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_email(""), Err(FieldError::MissingRequiredField));
        assert_eq!(validate_email("   "), Err(FieldError::MissingRequiredField));
        assert_eq!(validate_email("notanemail"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("a@b"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("a@b."), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("a b@c.de"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("a@@b.co"), Err(FieldError::InvalidFormat));
        assert_eq!(validate_email("a@b.co"), Ok(()));
        assert_eq!(validate_email("  user@example.com  "), Ok(()));
        assert_eq!(validate_email("first.last@sub.example.org"), Ok(()));
    }

    #[test]
    fn consent_rules() {
        assert_eq!(validate_consent(false), Err(FieldError::MissingRequiredField));
        assert_eq!(validate_consent(true), Ok(()));
    }

    #[test]
    fn message_present_iff_error_class_present() {
        let mut field = FieldState::new(Field::Email);
        for result in [
            Err(FieldError::MissingRequiredField),
            Ok(()),
            Err(FieldError::InvalidFormat),
            Ok(()),
        ] {
            field.record(result);
            assert_eq!(field.message().is_empty(), field.class().is_none());
        }
    }

    #[test]
    fn blur_shows_email_error_before_submit() {
        let mut state = filled("notanemail", false);
        state.blur_email();
        assert_eq!(state.email_field.error(), Some(FieldError::InvalidFormat));
        assert_eq!(state.email_field.message(), "Please enter a valid email address.");
        assert!(!state.consent_field.has_error());
    }

    #[test]
    fn typing_never_raises_an_error() {
        let mut state = NewsletterState::default();
        for value in ["u", "us", "user@", "user@ex"] {
            state.input_email(value.to_string());
            assert!(!state.email_field.has_error());
        }
    }

    #[test]
    fn typing_clears_error_once_valid() {
        let mut state = filled("", false);
        state.blur_email();
        assert_eq!(state.email_field.error(), Some(FieldError::MissingRequiredField));

        state.input_email("user@ex".to_string());
        assert!(state.email_field.has_error());

        state.input_email("user@ex.com".to_string());
        assert!(!state.email_field.has_error());
        assert_eq!(state.email_field.message(), "");
    }

    #[test]
    fn submit_rejects_and_focuses_first_error() {
        let mut state = filled("", false);
        assert_eq!(state.submit(), SubmitOutcome::Rejected { focus: Field::Email });
        assert_eq!(state.email_field.message(), "Email address is required.");
        assert_eq!(
            state.consent_field.message(),
            "You must agree to receive emails to continue."
        );
        assert!(!state.submitted);

        let mut state = filled("user@example.com", false);
        assert_eq!(state.submit(), SubmitOutcome::Rejected { focus: Field::Consent });
        assert!(!state.email_field.has_error());
    }

    #[test]
    fn valid_submission_is_accepted_exactly_once() {
        let mut state = filled(" user@example.com ", true);
        state.name = "  Ada ".to_string();

        let outcome = state.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted(Subscription {
                name: "Ada".to_string(),
                email: "user@example.com".to_string(),
                consent: true,
            })
        );
        assert!(state.submitted);
        assert_eq!(state.submit(), SubmitOutcome::AlreadySubmitted);
    }

    #[test]
    fn blur_then_submit_in_one_batch_keeps_both_updates() {
        let state = Rc::new(NewsletterState::default());
        let state = state.reduce(NewsletterAction::Email("user@".to_string()));
        let state = state.reduce(NewsletterAction::BlurEmail);
        let state = state.reduce(NewsletterAction::Consent(true));
        let state = state.reduce(NewsletterAction::Submit);

        assert_eq!(state.attempts, 1);
        assert_eq!(state.last_outcome, Some(SubmitOutcome::Rejected { focus: Field::Email }));
        assert_eq!(state.email_field.error(), Some(FieldError::InvalidFormat));
        assert!(state.consent);
    }

    #[test]
    fn every_attempt_is_counted_but_only_one_is_accepted() {
        let mut state = NewsletterState::default();
        state.apply(NewsletterAction::Email("user@example.com".to_string()));
        state.apply(NewsletterAction::Consent(true));
        state.apply(NewsletterAction::Submit);
        assert!(matches!(state.last_outcome, Some(SubmitOutcome::Accepted(_))));

        state.apply(NewsletterAction::Submit);
        assert_eq!(state.attempts, 2);
        assert_eq!(state.last_outcome, Some(SubmitOutcome::AlreadySubmitted));
    }

    #[test]
    fn resubmitting_after_fix_clears_stale_errors() {
        let mut state = filled("bad", false);
        let _ = state.submit();
        state.input_email("good@example.com".to_string());
        state.consent = true;
        assert!(matches!(state.submit(), SubmitOutcome::Accepted(_)));
        assert!(!state.email_field.has_error());
        assert!(!state.consent_field.has_error());
    }
}

//! Contact form model and Formspree response handling.
//!
//! The form posts to Formspree. Apart from required-field presence the site
//! performs no validation; whatever Formspree rejects comes back as
//! field-level messages that are shown verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Interests offered as checkboxes, in display order.
pub const TRAVEL_INTERESTS: [&str; 10] = [
    "Adventure Travel",
    "Cultural Experiences",
    "Beach Destinations",
    "Mountain Hiking",
    "City Exploration",
    "Food & Cuisine",
    "Photography Tours",
    "Budget Travel",
    "Luxury Travel",
    "Solo Travel",
];

/// Quick answers shown next to the form, as `(question, answer)`.
pub const FAQS: [(&str, &str); 3] = [
    (
        "Do you offer trip planning services?",
        "Yes! We provide personalized recommendations and tips based on your interests and budget.",
    ),
    (
        "Is the advice free?",
        "Basic travel advice and recommendations are completely free. We're passionate about helping fellow travelers!",
    ),
    (
        "Can I contribute content?",
        "Absolutely! We welcome guest posts and travel stories from our community. Get in touch to learn more.",
    ),
];

/// Topic picked in the subject dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactSubject {
    /// Trip planning assistance
    TripPlanning,
    /// Destination advice
    DestinationAdvice,
    /// Content collaboration
    Collaboration,
    /// Website feedback
    Feedback,
    /// Anything else
    Other,
}

impl ContactSubject {
    /// Dropdown order.
    pub const ALL: [ContactSubject; 5] = [
        ContactSubject::TripPlanning,
        ContactSubject::DestinationAdvice,
        ContactSubject::Collaboration,
        ContactSubject::Feedback,
        ContactSubject::Other,
    ];

    /// Submitted value.
    pub fn value(self) -> &'static str {
        match self {
            ContactSubject::TripPlanning => "trip-planning",
            ContactSubject::DestinationAdvice => "destination-advice",
            ContactSubject::Collaboration => "collaboration",
            ContactSubject::Feedback => "feedback",
            ContactSubject::Other => "other",
        }
    }

    /// Dropdown label.
    pub fn label(self) -> &'static str {
        match self {
            ContactSubject::TripPlanning => "Trip Planning Assistance",
            ContactSubject::DestinationAdvice => "Destination Advice",
            ContactSubject::Collaboration => "Content Collaboration",
            ContactSubject::Feedback => "Website Feedback",
            ContactSubject::Other => "Other",
        }
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for ContactSubject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactSubject::ALL
            .into_iter()
            .find(|subject| subject.value() == s)
            .ok_or_else(|| Error::UnknownSubject(s.to_string()))
    }
}

/// Current contents of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Picked topic; `None` until the user chooses one
    pub subject: Option<ContactSubject>,
    /// Free-text message
    pub message: String,
    /// Checked interests, in the order they were checked
    pub interests: Vec<String>,
}

impl ContactForm {
    /// Check or uncheck an interest.
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest.to_string());
        }
    }

    /// Whether `interest` is checked.
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }

    /// Names of required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.subject.is_none() {
            missing.push("subject");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }

    /// Payload sent to Formspree.
    pub fn submission(&self) -> Submission {
        Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.map(|s| s.value().to_string()).unwrap_or_default(),
            message: self.message.clone(),
            travel_interests: self.interests.join(", "),
        }
    }
}

/// JSON body posted to the form endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Sender name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Subject value
    pub subject: String,
    /// Message body
    pub message: String,
    /// Checked interests joined with `", "`
    #[serde(rename = "travelInterests")]
    pub travel_interests: String,
}

/// Where submissions are posted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormEndpoint {
    url: String,
}

impl FormEndpoint {
    /// Formspree endpoint for a form id.
    pub fn formspree(form_id: &str) -> Self {
        Self {
            url: format!("https://formspree.io/f/{}", form_id.trim()),
        }
    }

    /// Full POST URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Lifecycle of one submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing sent yet
    #[default]
    Idle,
    /// Request in flight
    Submitting,
    /// Accepted by the form service
    Succeeded,
    /// Rejected or not delivered; messages shown verbatim
    Failed(Vec<String>),
}

impl SubmissionState {
    /// The submit button is disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Messages to show under the form.
    pub fn errors(&self) -> &[String] {
        match self {
            SubmissionState::Failed(errors) => errors,
            _ => &[],
        }
    }
}

/// Shown when a failure response has no usable error list.
pub const GENERIC_FAILURE: &str = "Something went wrong while sending your message. Please try again.";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<FieldError>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    message: String,
}

/// Turn a form service response into the resulting state.
///
/// Any 2xx status is a success. Otherwise the `errors[].message` entries of
/// the JSON body are returned verbatim, falling back to a top-level `error`
/// string and finally to [`GENERIC_FAILURE`].
pub fn interpret_response(status: u16, body: &str) -> SubmissionState {
    if (200..300).contains(&status) {
        tracing::info!(status, "contact form accepted");
        return SubmissionState::Succeeded;
    }

    let messages = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => {
            parsed.errors.into_iter().map(|e| e.message).collect()
        }
        Ok(ErrorBody { error: Some(error), .. }) => vec![error],
        Ok(_) => vec![GENERIC_FAILURE.to_string()],
        Err(e) => {
            tracing::warn!(status, error = %e, "unexpected form service response body");
            vec![GENERIC_FAILURE.to_string()]
        }
    };

    tracing::info!(status, errors = messages.len(), "contact form rejected");
    SubmissionState::Failed(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: Some(ContactSubject::TripPlanning),
            message: "Two weeks in Japan?".into(),
            interests: Vec::new(),
        }
    }

    #[test]
    fn faqs_have_questions_and_answers() {
        assert!(!FAQS.is_empty());
        for (question, answer) in FAQS {
            assert!(question.ends_with('?'), "{question}");
            assert!(!answer.trim().is_empty(), "{question}");
        }
    }

    #[test]
    fn toggle_interest_adds_then_removes() {
        let mut form = ContactForm::default();
        form.toggle_interest("Solo Travel");
        form.toggle_interest("Budget Travel");
        assert_eq!(form.interests, ["Solo Travel", "Budget Travel"]);
        assert!(form.has_interest("Solo Travel"));
        form.toggle_interest("Solo Travel");
        assert_eq!(form.interests, ["Budget Travel"]);
    }

    #[test]
    fn blank_form_misses_every_required_field() {
        assert_eq!(
            ContactForm::default().missing_fields(),
            ["name", "email", "subject", "message"]
        );
        assert!(filled().missing_fields().is_empty());
    }

    #[test]
    fn whitespace_does_not_count_as_present() {
        let mut form = filled();
        form.message = "   ".into();
        assert_eq!(form.missing_fields(), ["message"]);
    }

    #[test]
    fn submission_joins_interests() {
        let mut form = filled();
        form.toggle_interest("Mountain Hiking");
        form.toggle_interest("Food & Cuisine");
        let json = serde_json::to_value(form.submission()).unwrap();
        assert_eq!(json["subject"], "trip-planning");
        assert_eq!(json["travelInterests"], "Mountain Hiking, Food & Cuisine");
    }

    #[test]
    fn formspree_url() {
        assert_eq!(FormEndpoint::formspree("xyzabc").url(), "https://formspree.io/f/xyzabc");
    }

    #[test]
    fn subject_values_parse() {
        assert_eq!("feedback".parse::<ContactSubject>().unwrap(), ContactSubject::Feedback);
        assert!("Feedback".parse::<ContactSubject>().is_err());
    }

    #[test]
    fn success_status_succeeds() {
        assert_eq!(interpret_response(200, r#"{"ok":true}"#), SubmissionState::Succeeded);
        assert_eq!(interpret_response(201, ""), SubmissionState::Succeeded);
    }

    #[test]
    fn field_errors_are_verbatim() {
        let body = r#"{"errors":[{"code":"TYPE_EMAIL","field":"email","message":"should be an email"},{"field":"message","message":"is required"}]}"#;
        let state = interpret_response(422, body);
        assert_eq!(state.errors(), ["should be an email", "is required"]);
    }

    #[test]
    fn top_level_error_string() {
        let state = interpret_response(404, r#"{"error":"Form not found"}"#);
        assert_eq!(state.errors(), ["Form not found"]);
    }

    #[test]
    fn unreadable_body_gets_generic_message() {
        assert_eq!(interpret_response(500, "<html>oops</html>").errors(), [GENERIC_FAILURE]);
        assert_eq!(interpret_response(400, "{}").errors(), [GENERIC_FAILURE]);
    }

    #[test]
    fn only_submitting_disables_button() {
        assert!(SubmissionState::Submitting.is_submitting());
        assert!(!SubmissionState::Idle.is_submitting());
        assert!(SubmissionState::Idle.errors().is_empty());
    }
}

use serde::{Deserialize, Serialize};

// The in-progress registration form data. It's owned by whichever page is
// currently showing the form and never outlives it - nothing here is
// persisted anywhere.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
	pub full_name: String,
	pub email: String,
	pub contact_number: String,
	// Kept in selection order so the joined field we send out is stable
	pub selected_workshops: Vec<String>
}

impl RegistrationDraft {
	// Adds the workshop if it isn't selected yet, removes it if it is.
	// Toggling the same name twice gets you back where you started.
	pub fn toggle_workshop(&mut self, name: &str) {
		if let Some(pos) = self.selected_workshops.iter().position(|w| w == name) {
			self.selected_workshops.remove(pos);
		} else {
			self.selected_workshops.push(name.to_string());
		}
	}

	#[must_use]
	pub fn has_workshop(&self, name: &str) -> bool {
		self.selected_workshops.iter().any(|w| w == name)
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	// Nothing is enforced while the user types; this runs when they hit
	// submit. Whitespace-only fields count as empty.
	pub fn validate(&self) -> Result<(), Vec<MissingField>> {
		let mut missing = Vec::new();

		if self.full_name.trim().is_empty() {
			missing.push(MissingField::FullName);
		}
		if !email_looks_valid(self.email.trim()) {
			missing.push(MissingField::Email);
		}
		if self.contact_number.trim().is_empty() {
			missing.push(MissingField::ContactNumber);
		}
		if self.selected_workshops.is_empty() {
			missing.push(MissingField::Workshops);
		}

		if missing.is_empty() {
			Ok(())
		} else {
			Err(missing)
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingField {
	FullName,
	Email,
	ContactNumber,
	Workshops
}

impl MissingField {
	#[must_use]
	pub fn describe(self) -> &'static str {
		match self {
			Self::FullName => "your full name",
			Self::Email => "a valid email address",
			Self::ContactNumber => "a contact number",
			Self::Workshops => "at least one workshop"
		}
	}
}

// The same check the old site ran, i.e. "does the text contain something
// shaped like \S+@\S+\.\S+". It's deliberately permissive - the endpoint is
// the real judge of what an address is, we just catch obvious typos.
#[must_use]
pub fn email_looks_valid(email: &str) -> bool {
	let chars = email.chars().collect::<Vec<_>>();

	for (i, &c) in chars.iter().enumerate() {
		if c != '@' || i == 0 || chars[i - 1].is_whitespace() {
			continue;
		}

		// The run of non-whitespace after the '@' has to contain a '.'
		// with at least one more character on both sides of it
		let run = chars[i + 1..]
			.iter()
			.copied()
			.take_while(|c| !c.is_whitespace())
			.collect::<Vec<_>>();

		if run.iter().enumerate().any(|(j, &c)| c == '.' && j > 0 && j + 1 < run.len()) {
			return true;
		}
	}

	false
}

// Where a submission attempt currently is. There's exactly one of these per
// visible registration form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
	#[default]
	Idle,
	Validating,
	Pending,
	Succeeded,
	Failed
}

impl SubmissionState {
	// Whether the submit control should accept another attempt. A failed
	// attempt keeps the draft around, so it can be resubmitted as-is.
	#[must_use]
	pub fn can_submit(self) -> bool {
		matches!(self, Self::Idle | Self::Failed)
	}
}

// The field names the spreadsheet script expects. It only takes flat
// key/value pairs, so the workshop selection goes out as one joined string
// instead of a repeated field.
#[must_use]
pub fn submission_fields(draft: &RegistrationDraft) -> [(&'static str, String); 4] {
	[
		("candidateName", draft.full_name.trim().to_string()),
		("candidateMail", draft.email.trim().to_string()),
		("candidateContact", draft.contact_number.trim().to_string()),
		("preferredWorkshop", draft.selected_workshops.join(", "))
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> RegistrationDraft {
		RegistrationDraft {
			full_name: "Asha Singh".into(),
			email: "asha@example.com".into(),
			contact_number: "9999999999".into(),
			selected_workshops: vec!["Python Programming".into()]
		}
	}

	#[test]
	fn filled_draft_validates() {
		assert_eq!(filled().validate(), Ok(()));
	}

	#[test]
	fn each_required_field_is_reported_when_missing() {
		let mut draft = filled();
		draft.full_name = "   ".into();
		assert_eq!(draft.validate(), Err(vec![MissingField::FullName]));

		let mut draft = filled();
		draft.email = "not-an-address".into();
		assert_eq!(draft.validate(), Err(vec![MissingField::Email]));

		let mut draft = filled();
		draft.contact_number = String::new();
		assert_eq!(draft.validate(), Err(vec![MissingField::ContactNumber]));

		let mut draft = filled();
		draft.selected_workshops.clear();
		assert_eq!(draft.validate(), Err(vec![MissingField::Workshops]));
	}

	#[test]
	fn empty_draft_reports_everything_at_once() {
		let missing = RegistrationDraft::default().validate().unwrap_err();
		assert_eq!(missing.len(), 4);
	}

	#[test]
	fn email_check_stays_permissive() {
		assert!(email_looks_valid("a@b.c"));
		assert!(email_looks_valid("asha@example.com"));
		// more than one '@' is fine, we're not the postmaster
		assert!(email_looks_valid("x@y@z.w"));

		assert!(!email_looks_valid(""));
		assert!(!email_looks_valid("abc"));
		assert!(!email_looks_valid("a@b"));
		assert!(!email_looks_valid("a@.c"));
		assert!(!email_looks_valid("a@b."));
		assert!(!email_looks_valid("a @b.c"));
	}

	#[test]
	fn toggling_twice_restores_the_selection() {
		let mut draft = filled();
		let before = draft.selected_workshops.clone();

		draft.toggle_workshop("Web Development");
		assert!(draft.has_workshop("Web Development"));

		draft.toggle_workshop("Web Development");
		assert!(!draft.has_workshop("Web Development"));
		assert_eq!(draft.selected_workshops, before);
	}

	#[test]
	fn clear_resets_every_field() {
		let mut draft = filled();
		draft.clear();
		assert_eq!(draft, RegistrationDraft::default());
	}

	#[test]
	fn fields_are_flattened_for_the_endpoint() {
		let mut draft = filled();
		draft.toggle_workshop("Web Development");
		draft.full_name = "  Asha Singh  ".into();

		let fields = submission_fields(&draft);
		assert_eq!(fields[0], ("candidateName", "Asha Singh".to_string()));
		assert_eq!(fields[1], ("candidateMail", "asha@example.com".to_string()));
		assert_eq!(fields[2], ("candidateContact", "9999999999".to_string()));
		assert_eq!(
			fields[3],
			("preferredWorkshop", "Python Programming, Web Development".to_string())
		);
	}

	#[test]
	fn draft_round_trips_through_json() {
		let draft = filled();
		let json = serde_json::to_string(&draft).unwrap();
		assert_eq!(serde_json::from_str::<RegistrationDraft>(&json).unwrap(), draft);
	}

	#[test]
	fn submit_gate_only_opens_when_idle_or_failed() {
		assert!(SubmissionState::Idle.can_submit());
		assert!(SubmissionState::Failed.can_submit());
		assert!(!SubmissionState::Validating.can_submit());
		assert!(!SubmissionState::Pending.can_submit());
		assert!(!SubmissionState::Succeeded.can_submit());
	}
}

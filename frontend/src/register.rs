use std::rc::Rc;

use yew::prelude::*;
use futures::join;
use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use shared_data::{submission_fields, RegistrationDraft, SubmissionState, WORKSHOPS};
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::{
	deliver,
	notify::{push_notice, NoticeKind, NoticesHandle}
};

// Keeps the pending notice on screen long enough to register with the
// user, even when the endpoint answers instantly. Runs alongside the POST,
// not before it.
const PENDING_PACE_MS: u32 = 2_000;

// Breathing room between the success notice and the form resetting under
// the user's cursor
const SETTLE_DELAY_MS: u32 = 500;

const VALIDATION_NOTICE: &str =
	"Please fill in your name, email and contact number, and pick at least one workshop.";

// Everything the registration form owns: the draft being edited, where the
// current submission attempt is, and which attempt any in-flight futures
// belong to. One instance per visible form, thrown away with the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationFlow {
	pub draft: RegistrationDraft,
	pub submission: SubmissionState,
	pub attempt: Option<Uuid>,
	pub last_error: Option<String>
}

pub enum FlowMsg {
	FullName(String),
	Email(String),
	Contact(String),
	ToggleWorkshop(String),
	// The user hit submit: move into Validating
	Submit,
	// Validation came up short: back to Idle, draft untouched
	Invalid,
	// Validation passed: move to Pending under the given attempt id
	Begin(Uuid),
	// The delivery channel reported this attempt went through
	Delivered(Uuid),
	// The delivery channel reported this attempt fell over
	DeliveryFailed(Uuid, String),
	// The settle delay after a success ran out: clear and re-open the form
	Settled(Uuid)
}

impl Reducible for RegistrationFlow {
	type Action = FlowMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut next = (*self).clone();

		// Completion messages carry the attempt id they belong to, and
		// anything stale (a timer that outlived its page, a second wakeup
		// for an attempt that already resolved) just falls through as a
		// no-op instead of mangling a newer attempt's state
		match action {
			FlowMsg::FullName(value) => next.draft.full_name = value,
			FlowMsg::Email(value) => next.draft.email = value,
			FlowMsg::Contact(value) => next.draft.contact_number = value,
			FlowMsg::ToggleWorkshop(name) => next.draft.toggle_workshop(&name),
			FlowMsg::Submit => if next.submission.can_submit() {
				next.submission = SubmissionState::Validating;
				next.last_error = None;
			},
			FlowMsg::Invalid => if next.submission == SubmissionState::Validating {
				next.submission = SubmissionState::Idle;
			},
			FlowMsg::Begin(attempt) =>
				// Pending is only reachable off the back of a passing
				// validation; re-check here so no caller can skip it
				if next.submission == SubmissionState::Validating && next.draft.validate().is_ok() {
					next.submission = SubmissionState::Pending;
					next.attempt = Some(attempt);
				},
			FlowMsg::Delivered(attempt) =>
				if next.submission == SubmissionState::Pending && next.attempt == Some(attempt) {
					next.submission = SubmissionState::Succeeded;
				},
			FlowMsg::DeliveryFailed(attempt, reason) =>
				if next.submission == SubmissionState::Pending && next.attempt == Some(attempt) {
					next.submission = SubmissionState::Failed;
					next.attempt = None;
					next.last_error = Some(reason);
				},
			FlowMsg::Settled(attempt) =>
				if next.submission == SubmissionState::Succeeded && next.attempt == Some(attempt) {
					next.draft.clear();
					next.submission = SubmissionState::Idle;
					next.attempt = None;
				}
		}

		next.into()
	}
}

// Runs whatever side effects the submission state we just landed in calls
// for. The reducer above stays pure; this is where notices, timers and the
// actual delivery happen.
fn drive_submission(
	state: SubmissionState,
	flow: &UseReducerHandle<RegistrationFlow>,
	notices: Option<&NoticesHandle>
) {
	match state {
		SubmissionState::Idle => {},

		SubmissionState::Validating => match flow.draft.validate() {
			Ok(()) => flow.dispatch(FlowMsg::Begin(Uuid::new_v4())),
			Err(missing) => {
				let reasons = missing.iter().map(|m| m.describe()).collect::<Vec<_>>().join(", ");
				log!(format!("registration rejected, still needed: {reasons}"));
				if let Some(notices) = notices {
					push_notice(notices, NoticeKind::Error, VALIDATION_NOTICE);
				}
				flow.dispatch(FlowMsg::Invalid);
			}
		},

		SubmissionState::Pending => {
			let Some(attempt) = flow.attempt else {
				log!("pending without an attempt id, ignoring");
				return;
			};

			if let Some(notices) = notices {
				push_notice(notices, NoticeKind::Pending, "Submitting your registration...");
			}

			let fields = submission_fields(&flow.draft);
			let flow = flow.clone();

			wasm_bindgen_futures::spawn_local(async move {
				// The pace timer runs alongside the POST so the pending
				// notice is perceivable without holding the POST back
				let (sent, ()) = join!(
					deliver::post_form(&fields),
					TimeoutFuture::new(PENDING_PACE_MS)
				);

				// If the user navigated away mid-flight, these dispatches
				// land on a dropped scope and do nothing, which is exactly
				// what we want
				match sent {
					Ok(()) => flow.dispatch(FlowMsg::Delivered(attempt)),
					Err(err) => {
						log!(format!("registration delivery failed: {err}"));
						flow.dispatch(FlowMsg::DeliveryFailed(attempt, err.to_string()));
					}
				}
			});
		},

		SubmissionState::Succeeded => {
			let Some(attempt) = flow.attempt else { return };

			if let Some(notices) = notices {
				push_notice(
					notices,
					NoticeKind::Success,
					"You're registered! We'll be in touch with the details."
				);
			}

			let flow = flow.clone();
			wasm_bindgen_futures::spawn_local(async move {
				TimeoutFuture::new(SETTLE_DELAY_MS).await;
				flow.dispatch(FlowMsg::Settled(attempt));
			});
		},

		SubmissionState::Failed => if let Some(notices) = notices {
			let reason = flow.last_error.clone().unwrap_or_else(|| "unknown error".into());
			push_notice(
				notices,
				NoticeKind::Error,
				format!("We couldn't send your registration ({reason}). Your details are still here - please try again.")
			);
		}
	}
}

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
	// Workshop to start with already ticked; the detail pages use this
	#[prop_or_default]
	pub preselect: Option<AttrValue>
}

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
	let flow = {
		let preselect = props.preselect.clone();
		use_reducer_eq(move || {
			let mut flow = RegistrationFlow::default();
			if let Some(name) = preselect {
				flow.draft.toggle_workshop(&name);
			}
			flow
		})
	};
	let notices = use_context::<NoticesHandle>();

	// Every transition's side effects hang off the state we just rendered
	// into, so the machine is driven entirely by the reducer
	{
		let flow = flow.clone();
		use_effect_with(flow.submission, move |state| {
			drive_submission(*state, &flow, notices.as_ref());
		});
	}

	let pending = flow.submission == SubmissionState::Pending;
	let submit_disabled = !flow.submission.can_submit();

	macro_rules! field_callback {
		($variant:ident) => {{
			let flow = flow.clone();
			Callback::from(move |e: InputEvent| {
				if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
					flow.dispatch(FlowMsg::$variant(input.value()));
				}
			})
		}}
	}

	let name_input = field_callback!(FullName);
	let email_input = field_callback!(Email);
	let contact_input = field_callback!(Contact);

	let onsubmit = {
		let flow = flow.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			flow.dispatch(FlowMsg::Submit);
		})
	};

	html! {
		<form class="registration-form" onsubmit={ onsubmit }>
			<div class="form-group">
				<label for="candidate-name">{ "Full Name" }</label>
				<input
					id="candidate-name"
					placeholder="e.g., Asha Singh"
					value={ flow.draft.full_name.clone() }
					oninput={ name_input }
					disabled={ pending }
				/>
			</div>
			<div class="form-group">
				<label for="candidate-mail">{ "Email Address" }</label>
				<input
					id="candidate-mail"
					placeholder="e.g., asha@example.com"
					value={ flow.draft.email.clone() }
					oninput={ email_input }
					disabled={ pending }
				/>
			</div>
			<div class="form-group">
				<label for="candidate-contact">{ "Contact Number" }</label>
				<input
					id="candidate-contact"
					placeholder="10-digit mobile number"
					value={ flow.draft.contact_number.clone() }
					oninput={ contact_input }
					disabled={ pending }
				/>
			</div>
			<fieldset class="workshop-picker">
				<legend>{ "Which workshops are you interested in?" }</legend>
				{
					WORKSHOPS.iter().map(|workshop| {
						let flow = flow.clone();
						let title = workshop.title;

						html! {
							<label class="workshop-option" key={ workshop.slug }>
								<input
									type="checkbox"
									checked={ flow.draft.has_workshop(title) }
									disabled={ pending }
									onchange={ Callback::from(move |_|
										flow.dispatch(FlowMsg::ToggleWorkshop(title.to_string()))
									) }
								/>
								{ title }
							</label>
						}
					}).collect::<Html>()
				}
			</fieldset>
			<button type="submit" disabled={ submit_disabled }>
				{ if pending { "Submitting..." } else { "Submit Registration" } }
			</button>
		</form>
	}
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
	html! {
		<>
			<style>
			{
				"
				.register-intro {
					max-width: 640px;
					margin: 0 auto 24px auto;
				}
				.register-info {
					max-width: 640px;
					margin: 32px auto 0 auto;
					padding: 16px 20px;
					background-color: var(--card-background);
					border: 1px solid var(--border-color);
					border-radius: 8px;
				}
				"
			}
			</style>
			<section class="page-section">
				<h1 class="page-title">{ "Register for a Workshop" }</h1>
				<p class="register-intro">
					{ "Tell us who you are and which workshops you'd like to join. \
					   Seats are confirmed over email, so double-check your address." }
				</p>
				<RegistrationForm />
				<div class="register-info">
					<h3>{ "How registration works" }</h3>
					<p>{ "Your details go straight to our registration sheet. We'll reach out \
					      with schedules, fees and venue details for the workshops you picked." }</p>
					<p>{ "For offline registration or immediate help, the Contact page has our \
					      phone number and email." }</p>
				</div>
			</section>
		</>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn reduce(flow: RegistrationFlow, msg: FlowMsg) -> RegistrationFlow {
		Rc::new(flow).reduce(msg).as_ref().clone()
	}

	fn filled_flow() -> RegistrationFlow {
		let mut flow = RegistrationFlow::default();
		for msg in [
			FlowMsg::FullName("Asha Singh".into()),
			FlowMsg::Email("asha@example.com".into()),
			FlowMsg::Contact("9999999999".into()),
			FlowMsg::ToggleWorkshop("Python Programming".into())
		] {
			flow = reduce(flow, msg);
		}
		flow
	}

	#[test]
	fn a_valid_draft_walks_the_whole_path() {
		// Idle -> Validating -> Pending -> Succeeded -> Idle
		let mut flow = filled_flow();
		assert_eq!(flow.submission, SubmissionState::Idle);

		flow = reduce(flow, FlowMsg::Submit);
		assert_eq!(flow.submission, SubmissionState::Validating);

		let attempt = Uuid::new_v4();
		flow = reduce(flow, FlowMsg::Begin(attempt));
		assert_eq!(flow.submission, SubmissionState::Pending);
		assert!(!flow.submission.can_submit());

		flow = reduce(flow, FlowMsg::Delivered(attempt));
		assert_eq!(flow.submission, SubmissionState::Succeeded);

		flow = reduce(flow, FlowMsg::Settled(attempt));
		assert_eq!(flow.submission, SubmissionState::Idle);
		assert!(flow.submission.can_submit());
		assert_eq!(flow.draft, RegistrationDraft::default());
	}

	#[test]
	fn an_empty_workshop_list_never_reaches_pending() {
		// Idle -> Validating -> (Begin refused) -> Idle, draft untouched
		let mut flow = filled_flow();
		flow = reduce(flow, FlowMsg::ToggleWorkshop("Python Programming".into()));
		let draft_before = flow.draft.clone();

		flow = reduce(flow, FlowMsg::Submit);
		assert_eq!(flow.submission, SubmissionState::Validating);

		flow = reduce(flow, FlowMsg::Begin(Uuid::new_v4()));
		assert_eq!(flow.submission, SubmissionState::Validating);
		assert_eq!(flow.attempt, None);

		flow = reduce(flow, FlowMsg::Invalid);
		assert_eq!(flow.submission, SubmissionState::Idle);
		assert_eq!(flow.draft, draft_before);
	}

	#[test]
	fn submitting_while_pending_is_refused() {
		let mut flow = filled_flow();
		flow = reduce(flow, FlowMsg::Submit);
		flow = reduce(flow, FlowMsg::Begin(Uuid::new_v4()));
		assert_eq!(flow.submission, SubmissionState::Pending);

		flow = reduce(flow, FlowMsg::Submit);
		assert_eq!(flow.submission, SubmissionState::Pending);
	}

	#[test]
	fn a_failed_delivery_keeps_the_draft_for_retry() {
		let mut flow = filled_flow();
		let draft_before = flow.draft.clone();

		flow = reduce(flow, FlowMsg::Submit);
		let attempt = Uuid::new_v4();
		flow = reduce(flow, FlowMsg::Begin(attempt));
		flow = reduce(flow, FlowMsg::DeliveryFailed(attempt, "endpoint answered with status 502".into()));

		assert_eq!(flow.submission, SubmissionState::Failed);
		assert!(flow.submission.can_submit());
		assert_eq!(flow.draft, draft_before);
		assert_eq!(flow.last_error.as_deref(), Some("endpoint answered with status 502"));

		// And a retry goes right back through validation
		flow = reduce(flow, FlowMsg::Submit);
		assert_eq!(flow.submission, SubmissionState::Validating);
		assert_eq!(flow.last_error, None);
	}

	#[test]
	fn stale_completions_are_no_ops() {
		let mut flow = filled_flow();
		flow = reduce(flow, FlowMsg::Submit);
		let attempt = Uuid::new_v4();
		flow = reduce(flow, FlowMsg::Begin(attempt));

		// A completion for some other attempt changes nothing
		flow = reduce(flow, FlowMsg::Delivered(Uuid::new_v4()));
		assert_eq!(flow.submission, SubmissionState::Pending);
		flow = reduce(flow, FlowMsg::DeliveryFailed(Uuid::new_v4(), "nope".into()));
		assert_eq!(flow.submission, SubmissionState::Pending);

		// The real one lands, and then a duplicate of it is ignored too
		flow = reduce(flow, FlowMsg::Delivered(attempt));
		assert_eq!(flow.submission, SubmissionState::Succeeded);
		flow = reduce(flow, FlowMsg::Delivered(attempt));
		assert_eq!(flow.submission, SubmissionState::Succeeded);

		// Settling twice doesn't re-clear a fresh draft either
		flow = reduce(flow, FlowMsg::Settled(attempt));
		flow = reduce(flow, FlowMsg::FullName("Ravi".into()));
		flow = reduce(flow, FlowMsg::Settled(attempt));
		assert_eq!(flow.draft.full_name, "Ravi");
	}

	#[test]
	fn editing_fields_is_reflected_immediately() {
		let mut flow = RegistrationFlow::default();
		flow = reduce(flow, FlowMsg::Email("a@b.c".into()));
		assert_eq!(flow.draft.email, "a@b.c");

		flow = reduce(flow, FlowMsg::ToggleWorkshop("Web Development".into()));
		flow = reduce(flow, FlowMsg::ToggleWorkshop("Web Development".into()));
		assert!(flow.draft.selected_workshops.is_empty());
	}
}

use yew::prelude::*;
use gloo_console::log;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::notify::{push_notice, NoticeKind, NoticesHandle};

// Feedback stays local: it's logged for now, nothing leaves the page. The
// point of the form is the thank-you flow and the anonymity option.
#[derive(Clone, Debug, Default, PartialEq)]
struct FeedbackDraft {
	workshop_name: String,
	rating: Option<u8>,
	likes: String,
	improvements: String,
	// Both optional, so feedback can stay anonymous
	name: String,
	email: String
}

#[function_component(Feedback)]
pub fn feedback() -> Html {
	let draft = use_state_eq(FeedbackDraft::default);
	let submitted = use_state_eq(|| false);
	let show_tip = use_state_eq(|| true);
	let notices = use_context::<NoticesHandle>();

	if *submitted {
		return html! {
			<>
				<section class="page-section">
					<div class="card" style="text-align: center; max-width: 560px; margin: 48px auto;">
						<h2>{ "Your Feedback is Valuable!" }</h2>
						<p>{ "Thank you for taking the time to share your thoughts. We'll use \
						      your feedback to improve our future workshops." }</p>
					</div>
				</section>
			</>
		};
	}

	macro_rules! input_callback {
		($field:ident, $element:ty) => {{
			let draft = draft.clone();
			Callback::from(move |e: InputEvent| {
				if let Some(input) = e.target().and_then(|t| t.dyn_into::<$element>().ok()) {
					let mut next = (*draft).clone();
					next.$field = input.value();
					draft.set(next);
				}
			})
		}}
	}

	let workshop_input = input_callback!(workshop_name, HtmlInputElement);
	let likes_input = input_callback!(likes, HtmlTextAreaElement);
	let improvements_input = input_callback!(improvements, HtmlTextAreaElement);
	let name_input = input_callback!(name, HtmlInputElement);
	let email_input = input_callback!(email, HtmlInputElement);

	let onsubmit = {
		let draft = draft.clone();
		let submitted = submitted.clone();

		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			if draft.rating.is_none() {
				if let Some(notices) = &notices {
					push_notice(
						notices,
						NoticeKind::Error,
						"Please provide a rating for the workshop experience."
					);
				}
				return;
			}

			log!(format!("feedback submitted: {:?}", *draft));
			submitted.set(true);
		})
	};

	html! {
		<>
			<style>
			{
				"
				.feedback-intro {
					text-align: center;
					max-width: 640px;
					margin: 0 auto 16px auto;
					color: var(--secondary-text);
				}
				.feedback-tip {
					max-width: 640px;
					margin: 0 auto 16px auto;
					padding: 10px 14px;
					border: 1px dashed var(--border-color);
					border-radius: 6px;
					display: flex;
					justify-content: space-between;
					gap: 8px;
				}
				.feedback-tip button {
					background: none;
					border: none;
					color: var(--secondary-text);
				}
				.rating-scale button {
					margin-right: 6px;
					background: none;
					color: var(--main-text);
					border: 1px solid var(--border-color);
				}
				.rating-scale button.selected {
					border-color: var(--accent);
					color: var(--accent);
					font-weight: bold;
				}
				.feedback-form textarea {
					resize: vertical;
					min-height: 80px;
				}
				"
			}
			</style>
			<section class="page-section">
				<h1 class="page-title">{ "Share Your Feedback" }</h1>
				<p class="feedback-intro">
					{ "We value your opinion! Your feedback helps us improve our workshops and \
					   create better learning experiences. This form is short and respects \
					   your privacy." }
				</p>

				{
					if *show_tip {
						let show_tip = show_tip.clone();
						html! {
							<div class="feedback-tip">
								<span>{ "Tip: filling out your name and email is optional if you \
								         wish to remain anonymous." }</span>
								<button
									aria-label="Dismiss tip"
									onclick={ Callback::from(move |_| show_tip.set(false)) }
								>{ "✕" }</button>
							</div>
						}
					} else {
						html! {}
					}
				}

				<form class="feedback-form" onsubmit={ onsubmit }>
					<div class="form-group">
						<label for="feedback-workshop">{ "Which workshop did you attend? (Optional)" }</label>
						<input
							id="feedback-workshop"
							placeholder="e.g., Python Programming, Cyber Security Essentials"
							value={ draft.workshop_name.clone() }
							oninput={ workshop_input }
						/>
					</div>

					<div class="form-group">
						<label>{ "Overall, how would you rate your workshop experience?" }</label>
						<div class="rating-scale">
							{
								(1..=5u8).map(|rate| {
									let draft = draft.clone();
									let selected = draft.rating == Some(rate);

									html! {
										<button
											type="button"
											class={ if selected { "selected" } else { "" } }
											onclick={ Callback::from(move |_| {
												let mut next = (*draft).clone();
												next.rating = Some(rate);
												draft.set(next);
											}) }
										>
											{ rate }
										</button>
									}
								}).collect::<Html>()
							}
						</div>
					</div>

					<div class="form-group">
						<label for="feedback-likes">{ "What did you like most?" }</label>
						<textarea
							id="feedback-likes"
							value={ draft.likes.clone() }
							oninput={ likes_input }
						/>
					</div>

					<div class="form-group">
						<label for="feedback-improvements">{ "What could we improve?" }</label>
						<textarea
							id="feedback-improvements"
							value={ draft.improvements.clone() }
							oninput={ improvements_input }
						/>
					</div>

					<div class="form-group">
						<label for="feedback-name">{ "Your Name (Optional)" }</label>
						<input
							id="feedback-name"
							value={ draft.name.clone() }
							oninput={ name_input }
						/>
					</div>

					<div class="form-group">
						<label for="feedback-email">{ "Your Email (Optional)" }</label>
						<input
							id="feedback-email"
							value={ draft.email.clone() }
							oninput={ email_input }
						/>
					</div>

					<button type="submit">{ "Submit Feedback" }</button>
				</form>
			</section>
		</>
	}
}

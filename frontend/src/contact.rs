use yew::prelude::*;
use gloo_console::log;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::{
	deliver,
	notify::{push_notice, NoticeKind, NoticesHandle}
};

static FAQS: &[(&str, &str)] = &[
	(
		"What kind of workshops do you offer?",
		"We offer a variety of tech workshops, including Python Programming, Web Development, \
		 Cybersecurity Essentials, Data Visualization with Power BI, Robotics, and AI concepts."
	),
	(
		"Who can attend these workshops?",
		"Our workshops are primarily designed for students in classes 11 and 12 (+2 level). Some \
		 workshops may have specific prerequisites, which will be mentioned in the workshop details."
	),
	(
		"How can I register for a workshop?",
		"You can register through the 'Register' link in our navigation bar, or straight from any \
		 workshop's detail page."
	),
	(
		"Are the workshops online or offline?",
		"Currently, most of our workshops are conducted offline in Patna, Bihar, to provide a \
		 hands-on learning experience. We may offer online sessions in the future."
	),
	(
		"Is there a fee for attending workshops?",
		"Some workshops may have a nominal fee to cover materials and resources, while others \
		 might be free. Please check the specific workshop details for fee information."
	)
];

#[derive(Clone, Debug, Default, PartialEq)]
struct ContactDraft {
	name: String,
	email: String,
	message: String
}

#[function_component(Contact)]
pub fn contact() -> Html {
	let draft = use_state_eq(ContactDraft::default);
	let sending = use_state_eq(|| false);
	let open_faq = use_state_eq(|| Option::<usize>::None);
	let notices = use_context::<NoticesHandle>();

	macro_rules! input_callback {
		($field:ident) => {{
			let draft = draft.clone();
			Callback::from(move |e: InputEvent| {
				if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
					let mut next = (*draft).clone();
					next.$field = input.value();
					draft.set(next);
				}
			})
		}}
	}

	let name_input = input_callback!(name);
	let email_input = input_callback!(email);

	let message_input = {
		let draft = draft.clone();
		Callback::from(move |e: InputEvent| {
			if let Some(area) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
				let mut next = (*draft).clone();
				next.message = area.value();
				draft.set(next);
			}
		})
	};

	let onsubmit = {
		let draft = draft.clone();
		let sending = sending.clone();
		let notices = notices.clone();

		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			if draft.name.trim().is_empty()
				|| draft.email.trim().is_empty()
				|| draft.message.trim().is_empty()
			{
				if let Some(notices) = &notices {
					push_notice(
						notices,
						NoticeKind::Error,
						"Please fill in all fields of the contact form."
					);
				}
				return;
			}

			// Don't stack up a second send while one's in flight
			if *sending {
				return;
			}
			sending.set(true);

			let fields = [
				("name", draft.name.trim().to_string()),
				("email", draft.email.trim().to_string()),
				("message", draft.message.trim().to_string())
			];

			let draft = draft.clone();
			let sending = sending.clone();
			let notices = notices.clone();

			wasm_bindgen_futures::spawn_local(async move {
				match deliver::post_form(&fields).await {
					Ok(()) => {
						if let Some(notices) = &notices {
							push_notice(notices, NoticeKind::Success, "Message sent - we'll get back to you soon!");
						}
						draft.set(ContactDraft::default());
					},
					Err(err) => {
						log!(format!("contact form delivery failed: {err}"));
						if let Some(notices) = &notices {
							push_notice(notices, NoticeKind::Error, "Sending failed. Please try again.");
						}
					}
				}

				sending.set(false);
			});
		})
	};

	html! {
		<>
			<style>
			{
				"
				.contact-grid {
					display: grid;
					grid-template-columns: 1fr 1fr;
					gap: 14px;
				}
				@media (max-width: 700px) {
					.contact-grid {
						grid-template-columns: 1fr;
					}
				}
				.contact-form textarea {
					resize: vertical;
					min-height: 120px;
				}
				.faq-question {
					width: 100%;
					text-align: left;
					background: none;
					color: var(--main-text);
					border: none;
					padding: 12px 4px;
					font-size: 16px;
					border-bottom: 1px solid var(--border-color);
				}
				.faq-answer {
					padding: 8px 4px 16px 4px;
					color: var(--secondary-text);
				}
				"
			}
			</style>
			<section class="page-section">
				<h1 class="page-title">{ "Get In Touch" }</h1>
				<p style="text-align: center; color: var(--secondary-text);">
					{ "We're here to answer your questions, discuss collaborations, or just \
					   chat about tech! Reach out through any of the channels below, or use \
					   our contact form." }
				</p>

				<div class="contact-grid">
					<div>
						<div class="card">
							<h3>{ "Contact Information" }</h3>
							<p><strong>{ "Address: " }</strong>
								{ "Tech Hub - XyberWeb Patna, Boring Road, Patna, Bihar, 800001, India" }</p>
							<p><strong>{ "Email: " }</strong>
								<a href="mailto:contact@xyberweb.in">{ "contact@xyberweb.in" }</a></p>
							<p><strong>{ "Phone: " }</strong>
								<a href="tel:+919142315603">{ "+91 9142315603" }</a></p>
						</div>
						<div class="card">
							<h3>{ "Connect With Us" }</h3>
							<p><a href="https://www.instagram.com/xyberweb" target="_blank" rel="noopener noreferrer">
								{ "Instagram" }</a></p>
							<p><a href="https://www.linkedin.com/company/xyberweb/" target="_blank" rel="noopener noreferrer">
								{ "LinkedIn" }</a></p>
						</div>
					</div>

					<form class="contact-form" onsubmit={ onsubmit }>
						<h3>{ "Send Us a Message" }</h3>
						<div class="form-group">
							<label for="contact-name">{ "Your Name" }</label>
							<input
								id="contact-name"
								value={ draft.name.clone() }
								oninput={ name_input }
								disabled={ *sending }
							/>
						</div>
						<div class="form-group">
							<label for="contact-email">{ "Your Email" }</label>
							<input
								id="contact-email"
								value={ draft.email.clone() }
								oninput={ email_input }
								disabled={ *sending }
							/>
						</div>
						<div class="form-group">
							<label for="contact-message">{ "Your Message" }</label>
							<textarea
								id="contact-message"
								value={ draft.message.clone() }
								oninput={ message_input }
								disabled={ *sending }
							/>
						</div>
						<button type="submit" disabled={ *sending }>
							{ if *sending { "Sending..." } else { "Send Message" } }
						</button>
					</form>
				</div>

				<div class="card">
					<h3>{ "Frequently Asked Questions" }</h3>
					{
						FAQS.iter().enumerate().map(|(i, (question, answer))| {
							let open = *open_faq == Some(i);
							let open_faq = open_faq.clone();

							html! {
								<div key={ i }>
									<button
										class="faq-question"
										aria-expanded={ if open { "true" } else { "false" } }
										onclick={ Callback::from(move |_|
											open_faq.set(if open { None } else { Some(i) })
										) }
									>
										{ *question }{ if open { " ▲" } else { " ▼" } }
									</button>
									{
										if open {
											html! { <div class="faq-answer">{ *answer }</div> }
										} else {
											html! {}
										}
									}
								</div>
							}
						}).collect::<Html>()
					}
				</div>
			</section>
		</>
	}
}

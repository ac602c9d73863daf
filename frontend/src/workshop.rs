use yew::prelude::*;
use yew_router::prelude::*;
use shared_data::{workshop_by_slug, Workshop};

use crate::{
	modal::Modal,
	register::RegistrationForm,
	Route
};

// Every workshop renders through this one page; the differences between
// them live entirely in their catalog records.
#[derive(Properties, PartialEq)]
pub struct WorkshopProps {
	pub slug: String
}

#[function_component(WorkshopDetail)]
pub fn workshop_detail(props: &WorkshopProps) -> Html {
	// Declared up front - yew panics if hooks show up after an early return
	let selected_image = use_state_eq(|| 0usize);
	let modal_open = use_state_eq(|| false);

	let Some(workshop) = workshop_by_slug(&props.slug) else {
		return html! {
			<>
				<section class="page-section">
					<h1 class="page-title">{ "Not Found" }</h1>
					<p style="text-align: center;">{ "We don't run a workshop by that name." }</p>
					<p style="text-align: center;">
						<Link<Route> to={ Route::Workshops }>{ "Back to all workshops" }</Link<Route>>
					</p>
				</section>
			</>
		};
	};

	let open_modal = {
		let modal_open = modal_open.clone();
		Callback::from(move |_: MouseEvent| modal_open.set(true))
	};
	let close_modal = {
		let modal_open = modal_open.clone();
		Callback::from(move |()| modal_open.set(false))
	};

	html! {
		<>
			<style>
			{
				"
				.workshop-header {
					text-align: center;
					margin-bottom: 24px;
				}
				.workshop-intro {
					max-width: 640px;
					margin: 0 auto;
					color: var(--secondary-text);
				}
				.workshop-content-grid {
					display: grid;
					grid-template-columns: 2fr 1fr;
					gap: 14px;
				}
				@media (max-width: 700px) {
					.workshop-content-grid {
						grid-template-columns: 1fr;
					}
				}
				.meta-item {
					margin: 8px 0;
				}
				.gallery-main img {
					width: 100%;
					border-radius: 8px;
				}
				.gallery-thumbs {
					display: flex;
					gap: 8px;
					margin-top: 8px;
				}
				.gallery-thumbs img {
					width: 90px;
					border-radius: 4px;
					cursor: pointer;
					opacity: 0.7;
				}
				.gallery-thumbs img.selected {
					opacity: 1.0;
					outline: 2px solid var(--accent);
				}
				.trainer-flex {
					display: flex;
					gap: 16px;
					align-items: flex-start;
				}
				.trainer-flex img {
					border-radius: 50%;
				}
				.final-cta {
					text-align: center;
					margin: 24px 0;
				}
				.modal-workshop-name {
					font-size: 20px;
					font-weight: bold;
					color: var(--accent);
				}
				"
			}
			</style>
			<section class="page-section">
				<header
					class="workshop-header"
					style={ format!("border-bottom: 4px solid {}", workshop.accent) }
				>
					<h1>{ workshop.title }</h1>
					<p class="workshop-intro">{ workshop.intro }</p>
				</header>

				<div class="workshop-content-grid">
					<div>
						<div class="card">
							<h3>{ "What You'll Learn" }</h3>
							<ul>
								{ workshop.learning_points.iter().map(|point| html! {
									<li>{ *point }</li>
								}).collect::<Html>() }
							</ul>
						</div>
						<div class="card">
							<h3>{ "Key Takeaways" }</h3>
							<ul>
								{ workshop.key_takeaways.iter().map(|point| html! {
									<li>{ *point }</li>
								}).collect::<Html>() }
							</ul>
						</div>
					</div>
					<div>
						<div class="card">
							<h3>{ "Workshop Details" }</h3>
							<p class="meta-item"><strong>{ "Audience: " }</strong>{ workshop.audience }</p>
							<p class="meta-item"><strong>{ "Prerequisites: " }</strong>{ workshop.prerequisites }</p>
							<p class="meta-item"><strong>{ "Duration: " }</strong>{ workshop.duration }</p>
							<p class="meta-item"><strong>{ "Format: " }</strong>{ workshop.format }</p>
						</div>
						<button onclick={ open_modal.clone() }>
							{ "Register for this Workshop" }
						</button>
					</div>
				</div>

				{ gallery_view(workshop, &selected_image) }

				<div class="card">
					<h3>{ "Meet Your Trainer" }</h3>
					<div class="trainer-flex">
						<img src={ workshop.trainer.image } alt={ format!("Trainer {}", workshop.trainer.name) } />
						<div>
							<h4>{ workshop.trainer.name }</h4>
							<p style="color: var(--secondary-text);">{ workshop.trainer.role }</p>
							<p>{ workshop.trainer.bio }</p>
						</div>
					</div>
				</div>

				<div class="final-cta">
					<button onclick={ open_modal }>
						{ "Secure Your Spot - Register Now!" }
					</button>
				</div>
			</section>

			<Modal open={ *modal_open } on_close={ close_modal }>
				<h2>{ "Register for" }</h2>
				<p class="modal-workshop-name">{ workshop.title }</p>
				<RegistrationForm preselect={ Some(AttrValue::from(workshop.title)) } />
			</Modal>
		</>
	}
}

fn gallery_view(workshop: &'static Workshop, selected: &UseStateHandle<usize>) -> Html {
	if workshop.gallery.is_empty() {
		return html! {};
	}

	// The selection carries over when you navigate between workshop pages,
	// so clamp it rather than indexing blindly into a shorter gallery
	let index = (**selected).min(workshop.gallery.len() - 1);
	let main_image = &workshop.gallery[index];

	html! {
		<div class="card">
			<h3>{ "Gallery" }</h3>
			<div class="gallery-main">
				<img src={ main_image.src } alt={ main_image.alt } />
			</div>
			<div class="gallery-thumbs">
				{
					workshop.gallery.iter().enumerate().map(|(i, image)| {
						let selected = selected.clone();

						html! {
							<img
								src={ image.src }
								alt={ image.alt }
								class={ if i == index { "selected" } else { "" } }
								onclick={ Callback::from(move |_| selected.set(i)) }
							/>
						}
					}).collect::<Html>()
				}
			</div>
		</div>
	}
}

use yew::prelude::*;
use yew_router::prelude::*;
use shared_data::WORKSHOPS;

use crate::Route;

#[function_component(Workshops)]
pub fn workshops() -> Html {
	html! {
		<>
			<style>
			{
				"
				.workshops-intro {
					text-align: center;
					max-width: 640px;
					margin: 0 auto 20px auto;
					color: var(--secondary-text);
				}
				.workshops-grid {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
					gap: 14px;
				}
				.workshop-card {
					display: flex;
					flex-direction: column;
				}
				.workshop-card p {
					flex-grow: 1;
					color: var(--secondary-text);
				}
				"
			}
			</style>
			<section class="page-section">
				<h1 class="page-title">{ "Our Workshops" }</h1>
				<p class="workshops-intro">
					{ "Dive into the world of technology with our hands-on workshops designed \
					   for +2 students. Explore diverse fields, gain practical skills, and \
					   ignite your passion for innovation." }
				</p>
				<div class="workshops-grid">
					{
						WORKSHOPS.iter().map(|workshop| html! {
							<div
								class="card workshop-card"
								key={ workshop.slug }
								style={ format!("border-top: 4px solid {}", workshop.accent) }
							>
								<h3>{ workshop.title }</h3>
								<p>{ workshop.blurb }</p>
								<Link<Route> to={ Route::Workshop { slug: workshop.slug.to_string() } }>
									<button>{ "Learn More" }</button>
								</Link<Route>>
							</div>
						}).collect::<Html>()
					}
				</div>
			</section>
		</>
	}
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
	html! {
		<>
			<style>
			{
				"
				.hero-section {
					text-align: center;
					padding: 48px 16px;
				}
				.hero-title {
					font-size: 34px;
					margin: 0 0 4px 0;
				}
				.hero-motto {
					letter-spacing: 2px;
					color: var(--accent);
				}
				.hero-subtitle {
					color: var(--secondary-text);
					max-width: 560px;
					margin: 12px auto 20px auto;
				}
				.offerings-grid {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
					gap: 12px;
				}
				.trust-signals {
					display: flex;
					justify-content: center;
					gap: 32px;
					text-align: center;
				}
				.trust-stat {
					font-size: 30px;
					font-weight: bold;
					color: var(--accent);
					margin: 0;
				}
				"
			}
			</style>
			<section class="page-section">
				<div class="hero-section">
					<h2 class="hero-title">{ "Ignite Your Tech Future" }</h2>
					<h3 class="hero-motto">{ "• DEFEND • DEVELOP • DOMINATE •" }</h3>
					<p class="hero-subtitle">
						{ "Empowering students in Patna with cutting-edge tech skills \
						   for a brighter tomorrow." }
					</p>
					<Link<Route> to={ Route::Workshops }>
						<button>{ "Explore Workshops" }</button>
					</Link<Route>>
				</div>

				<div class="card">
					<h3>{ "Our Mission" }</h3>
					<p>
						{ "We are a passionate team dedicated to bridging the technology gap \
						   for students in Patna. Our mission is to provide accessible, \
						   high-quality tech workshops that equip students with practical \
						   skills in emerging fields, fostering innovation and preparing them \
						   for future academic and career success." }
					</p>
				</div>

				<h3>{ "Key Offerings" }</h3>
				<div class="offerings-grid">
					<div class="card">
						<h4>{ "Coding & Robotics" }</h4>
						<p>{ "Dive into the world of programming and build your own robots. \
						      Learn Python, C++, and more." }</p>
					</div>
					<div class="card">
						<h4>{ "Data & Analytics" }</h4>
						<p>{ "Understand the power of data. Explore data science, machine \
						      learning, and visualization." }</p>
					</div>
					<div class="card">
						<h4>{ "Cyber Safety" }</h4>
						<p>{ "Navigate the digital world securely. Learn about cybersecurity \
						      essentials and ethical hacking." }</p>
					</div>
				</div>

				<div class="card">
					<h3 style="text-align: center;">{ "Building Trust" }</h3>
					<div class="trust-signals">
						<div>
							<p class="trust-stat">{ "100+" }</p>
							<p>{ "Students Trained" }</p>
						</div>
						<div>
							<p class="trust-stat">{ "5+" }</p>
							<p>{ "Workshops Conducted" }</p>
						</div>
					</div>
				</div>
			</section>
		</>
	}
}

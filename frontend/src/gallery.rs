use yew::prelude::*;

use crate::modal::Modal;

struct Shot {
	src: &'static str,
	alt: &'static str,
	caption: &'static str
}

struct Video {
	video_id: &'static str,
	thumbnail: &'static str,
	title: &'static str,
	caption: &'static str
}

static SHOTS: &[Shot] = &[
	Shot {
		src: "https://placehold.co/600x400/e2e8f0/4a5568?text=Workshop+Moment+1",
		alt: "Students collaborating in a workshop",
		caption: "Teamwork makes the dream work! Students deep in discussion during our Python workshop."
	},
	Shot {
		src: "https://placehold.co/600x400/d1fae5/065f46?text=Robotics+Project",
		alt: "A student showcasing a robotics project",
		caption: "Innovation in action: a student presents their line-following robot built with Arduino."
	},
	Shot {
		src: "https://placehold.co/600x400/dbeafe/1e40af?text=Cybersecurity+Talk",
		alt: "An instructor giving a talk on cybersecurity",
		caption: "Expert insights: our guest speaker shares crucial tips on navigating the digital world safely."
	},
	Shot {
		src: "https://placehold.co/600x400/fce7f3/831843?text=AI+Art+Creation",
		alt: "Students working with generative AI tools",
		caption: "Creativity unleashed! Exploring the fascinating world of AI-generated art."
	}
];

static VIDEOS: &[Video] = &[
	Video {
		video_id: "dQw4w9WgXcQ",
		thumbnail: "https://placehold.co/600x400/fef3c7/92400e?text=Workshop+Highlights+Video",
		title: "Workshop Highlights Reel",
		caption: "Catch the excitement! A quick look at the engaging moments from our recent tech fest."
	},
	Video {
		video_id: "rokGy0huYEA",
		thumbnail: "https://placehold.co/600x400/e0e7ff/3730a3?text=Student+Testimonial+Video",
		title: "Student Testimonial",
		caption: "Hear from our students! What they loved about our Data Visualization workshop."
	}
];

#[function_component(Gallery)]
pub fn gallery() -> Html {
	// Which image the lightbox is showing, if any
	let lightbox = use_state_eq(|| Option::<usize>::None);

	let close_lightbox = {
		let lightbox = lightbox.clone();
		Callback::from(move |()| lightbox.set(None))
	};

	html! {
		<>
			<style>
			{
				"
				.gallery-intro {
					text-align: center;
					max-width: 640px;
					margin: 0 auto 20px auto;
					color: var(--secondary-text);
				}
				.gallery-grid {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
					gap: 14px;
				}
				.gallery-item img {
					width: 100%;
					border-radius: 8px;
					cursor: pointer;
				}
				.gallery-caption {
					color: var(--secondary-text);
					font-size: 14px;
				}
				.video-link {
					text-decoration: none;
				}
				.lightbox-image {
					width: 100%;
					border-radius: 8px;
				}
				"
			}
			</style>
			<section class="page-section">
				<h1 class="page-title">{ "Gallery & Media" }</h1>
				<p class="gallery-intro">
					{ "Step into our world of learning and innovation. Browse through moments \
					   from our workshops, student projects, and special events." }
				</p>

				<h2>{ "Photo Gallery" }</h2>
				<div class="gallery-grid">
					{
						SHOTS.iter().enumerate().map(|(i, shot)| {
							let lightbox = lightbox.clone();

							html! {
								<div class="gallery-item" key={ i }>
									<img
										src={ shot.src }
										alt={ shot.alt }
										onclick={ Callback::from(move |_| lightbox.set(Some(i))) }
									/>
									<p class="gallery-caption">{ shot.caption }</p>
								</div>
							}
						}).collect::<Html>()
					}
				</div>

				<h2>{ "Videos" }</h2>
				<div class="gallery-grid">
					{
						VIDEOS.iter().map(|video| html! {
							<a
								class="video-link"
								key={ video.video_id }
								href={ format!("https://www.youtube.com/watch?v={}", video.video_id) }
								target="_blank"
								rel="noopener noreferrer"
								aria-label={ format!("Watch video: {}", video.title) }
							>
								<div class="gallery-item">
									<img src={ video.thumbnail } alt={ video.title } />
									<h4>{ video.title }</h4>
									<p class="gallery-caption">{ video.caption }</p>
								</div>
							</a>
						}).collect::<Html>()
					}
				</div>
			</section>

			<Modal open={ lightbox.is_some() } on_close={ close_lightbox }>
				{
					match *lightbox {
						Some(i) => {
							let shot = &SHOTS[i.min(SHOTS.len() - 1)];
							html! {
								<>
									<img class="lightbox-image" src={ shot.src } alt={ shot.alt } />
									<p class="gallery-caption">{ shot.caption }</p>
								</>
							}
						},
						None => html! {}
					}
				}
			</Modal>
		</>
	}
}

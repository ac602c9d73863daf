use yew::prelude::*;

struct TeamMember {
	name: &'static str,
	role: &'static str,
	bio: &'static str,
	image: &'static str
}

static TEAM: &[TeamMember] = &[
	TeamMember {
		name: "Satyam Srivastava",
		role: "Founder & Lead Instructor",
		bio: "Satyam is a passionate software engineer who started XyberWeb to bring the tech \
		      education he wished he'd had to students across Patna.",
		image: "https://placehold.co/400x400/dbeafe/1e40af?text=Satyam"
	},
	TeamMember {
		name: "Ayush Verma",
		role: "Full Stack Developer & AI Instructor",
		bio: "Ayush brings his day-job expertise in web development and applied AI straight into \
		      the classroom.",
		image: "https://placehold.co/400x400/d1fae5/065f46?text=Ayush"
	},
	TeamMember {
		name: "Suraj Kumar",
		role: "Curriculum Developer & Mentor",
		bio: "Suraj has a background in education design and makes sure every workshop actually \
		      teaches what it promises.",
		image: "https://placehold.co/400x400/fce7f3/831843?text=Suraj"
	},
	TeamMember {
		name: "Sameer Srivastava",
		role: "Marketing & Outreach Lead",
		bio: "Sameer connects XyberWeb with schools, communities and partners across Bihar.",
		image: "https://placehold.co/400x400/fef3c7/92400e?text=Sameer"
	},
	TeamMember {
		name: "Smriti Richa",
		role: "Student Success Coordinator",
		bio: "Smriti ensures a smooth learning experience for every student, from registration to \
		      the final demo.",
		image: "https://placehold.co/400x400/e0e7ff/3730a3?text=Richa"
	},
	TeamMember {
		name: "Shivam Srivastava",
		role: "Technical Support & Operations",
		bio: "Shivam manages the technical setup behind every workshop so the instructors can \
		      just teach.",
		image: "https://placehold.co/400x400/f3e8ff/5b21b6?text=Shivam"
	}
];

static MILESTONES: &[(&str, &str, &str)] = &[
	(
		"Apr 2024",
		"XyberWeb Founded",
		"Our journey began with a handful of laptops and a borrowed classroom."
	),
	(
		"May 2024",
		"First 5 Workshops Conducted",
		"Successfully trained over 100 students across our first batch of workshops."
	),
	(
		"Jun 2024",
		"Community Partnership",
		"Collaborated with local schools to bring workshops directly to their students."
	),
	(
		"Jul 2024",
		"Launched Advanced AI & Robotics Programs",
		"Expanded our offerings beyond the basics for returning students."
	)
];

static VALUES: &[(&str, &str)] = &[
	("Accessibility", "Making quality tech education available to all."),
	("Innovation", "Encouraging creative thinking and problem-solving."),
	("Community", "Building a supportive network of learners and mentors."),
	("Impact", "Creating positive change in students' lives.")
];

#[function_component(About)]
pub fn about() -> Html {
	html! {
		<>
			<style>
			{
				"
				.values-grid, .team-grid {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
					gap: 12px;
				}
				.team-card {
					text-align: center;
				}
				.team-card img {
					width: 120px;
					border-radius: 50%;
				}
				.team-role {
					color: var(--accent);
					font-size: 14px;
				}
				.milestone {
					display: flex;
					gap: 16px;
					padding: 8px 0;
					border-bottom: 1px solid var(--border-color);
				}
				.milestone-year {
					min-width: 90px;
					font-weight: bold;
					color: var(--accent);
				}
				.visuals-grid {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
					gap: 12px;
				}
				.visuals-grid img {
					width: 100%;
					border-radius: 8px;
				}
				"
			}
			</style>
			<section class="page-section">
				<h1 class="page-title">{ "About Us: Our Journey & Team" }</h1>

				<div class="card">
					<h2>{ "Our Story" }</h2>
					<p>
						{ "XyberWeb was born from a simple idea: to make cutting-edge technology \
						   education accessible and engaging for +2 students in Patna, Bihar. \
						   What started as a few friends teaching a weekend Python class has \
						   grown into a team running workshops across the city." }
					</p>
				</div>

				<div class="card">
					<h2>{ "Our Mission & Values" }</h2>
					<p>
						<strong>{ "Mission: " }</strong>
						{ "To empower the youth of Patna with practical, industry-relevant \
						   technology skills." }
					</p>
					<div class="values-grid">
						{
							VALUES.iter().map(|(value, description)| html! {
								<div class="card" key={ *value }>
									<h3>{ *value }</h3>
									<p>{ *description }</p>
								</div>
							}).collect::<Html>()
						}
					</div>
				</div>

				<h2>{ "Meet the Team" }</h2>
				<div class="team-grid">
					{
						TEAM.iter().map(|member| html! {
							<div class="card team-card" key={ member.name }>
								<img src={ member.image } alt={ member.name } />
								<h3>{ member.name }</h3>
								<p class="team-role">{ member.role }</p>
								<p>{ member.bio }</p>
							</div>
						}).collect::<Html>()
					}
				</div>

				<div class="card">
					<h2>{ "Our Milestones" }</h2>
					{
						MILESTONES.iter().map(|(year, event, description)| html! {
							<div class="milestone" key={ *year }>
								<div class="milestone-year">{ *year }</div>
								<div>
									<h3>{ *event }</h3>
									<p>{ *description }</p>
								</div>
							</div>
						}).collect::<Html>()
					}
				</div>

				<h2>{ "Glimpses of Our Journey" }</h2>
				<div class="visuals-grid">
					<img src="https://placehold.co/600x400/e2e8f0/4a5568?text=Team+Working" alt="Team working together" />
					<img src="https://placehold.co/600x400/d1fae5/065f46?text=Workshop+In+Action" alt="Students in a workshop" />
					<img src="https://placehold.co/600x400/fef3c7/92400e?text=Event+Moment" alt="A moment from a tech event" />
				</div>
			</section>
		</>
	}
}

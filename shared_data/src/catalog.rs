// The workshop catalog. This is static configuration, not code: every
// detail page, the workshops grid and the registration form all render off
// these records, so adding a workshop means adding an entry here and
// nothing else.

pub struct GalleryImage {
	pub src: &'static str,
	pub alt: &'static str
}

pub struct Trainer {
	pub name: &'static str,
	pub role: &'static str,
	pub bio: &'static str,
	pub image: &'static str
}

pub struct Workshop {
	pub slug: &'static str,
	pub title: &'static str,
	// One-liner for the card grid
	pub blurb: &'static str,
	// Longer lead paragraph for the detail page header
	pub intro: &'static str,
	pub learning_points: &'static [&'static str],
	pub key_takeaways: &'static [&'static str],
	pub audience: &'static str,
	pub prerequisites: &'static str,
	pub duration: &'static str,
	pub format: &'static str,
	pub gallery: &'static [GalleryImage],
	pub trainer: Trainer,
	// Accent color for the card border
	pub accent: &'static str
}

#[must_use]
pub fn workshop_by_slug(slug: &str) -> Option<&'static Workshop> {
	WORKSHOPS.iter().find(|w| w.slug == slug)
}

pub static WORKSHOPS: &[Workshop] = &[
	Workshop {
		slug: "cyber-security-essentials",
		title: "Cyber Security Essentials",
		blurb: "Learn how to be a digital detective! Explore online safety, ethical hacking basics, and how to protect your data.",
		intro: "Dive deep into digital defense. Understand cybersecurity fundamentals, common threats, and how to protect your information in an increasingly connected world.",
		learning_points: &[
			"Fundamentals of cybersecurity and why it matters.",
			"Common threats: malware, phishing and social engineering.",
			"Online safety, privacy and data protection basics.",
			"Introduction to ethical hacking, done responsibly.",
			"Strong passwords, password managers and multi-factor auth.",
			"Spotting malicious websites and suspicious emails.",
			"Digital footprints and managing your online reputation."
		],
		key_takeaways: &[
			"Practical habits that harden your personal digital security.",
			"A clear picture of today's threat landscape.",
			"The confidence to spot and dodge common online risks.",
			"A foundation for a tech or cybersecurity career."
		],
		audience: "Students of all streams with an interest in technology",
		prerequisites: "Basic computer literacy and internet usage skills.",
		duration: "2 days, 3 hours per day",
		format: "Interactive sessions, live demos, case studies and hands-on activities.",
		gallery: &[
			GalleryImage { src: "https://placehold.co/800x600/3b82f6/ffffff?text=Cyber+Security+Concept", alt: "Cyber security concept" },
			GalleryImage { src: "https://placehold.co/800x600/10b981/ffffff?text=Data+Protection", alt: "Data protection" },
			GalleryImage { src: "https://placehold.co/800x600/ef4444/ffffff?text=Network+Security", alt: "Network security" }
		],
		trainer: Trainer {
			name: "Satyam Srivastava",
			role: "Certified Ethical Hacker & Security Analyst",
			bio: "Satyam is a cybersecurity professional with over 5 years of experience in network security, ethical hacking and cyber forensics, dedicated to teaching young minds how to navigate the online world securely.",
			image: "https://placehold.co/128x128/dbeafe/1e40af?text=Satyam"
		},
		accent: "#3b82f6"
	},
	Workshop {
		slug: "power-bi",
		title: "Power BI (Data Visualization)",
		blurb: "Turn data into colorful charts and dashboards. Work with real data to tell stories with graphs.",
		intro: "Raw numbers rarely convince anyone. Learn to shape real datasets into dashboards and charts that actually tell a story.",
		learning_points: &[
			"Loading and cleaning data from spreadsheets and CSV files.",
			"Building bar, line and map visuals that answer questions.",
			"Combining visuals into an interactive dashboard.",
			"Filters, slicers and drill-downs for exploring data live.",
			"Publishing and sharing a finished report."
		],
		key_takeaways: &[
			"A dashboard you built yourself from a real dataset.",
			"An eye for which chart fits which question.",
			"Data-literacy skills that carry into any field of study."
		],
		audience: "Students curious about data, statistics or business",
		prerequisites: "Comfort with basic spreadsheets helps but isn't required.",
		duration: "2 days, 3 hours per day",
		format: "Guided exercises on provided datasets, ending with a mini project.",
		gallery: &[
			GalleryImage { src: "https://placehold.co/800x600/10b981/ffffff?text=Dashboard+Building", alt: "Dashboard building session" },
			GalleryImage { src: "https://placehold.co/800x600/6366f1/ffffff?text=Chart+Gallery", alt: "Chart gallery" }
		],
		trainer: Trainer {
			name: "Ayush Verma",
			role: "Full Stack Developer & Data Instructor",
			bio: "Ayush builds data products for a living and loves showing students how a messy spreadsheet turns into a chart a whole room understands at a glance.",
			image: "https://placehold.co/128x128/d1fae5/065f46?text=Ayush"
		},
		accent: "#10b981"
	},
	Workshop {
		slug: "generative-ai",
		title: "Generative AI & Agentic AI",
		blurb: "Experiment with AI tools that create art and text. Understand how AI 'thinks'.",
		intro: "Play with the tools that generate text, images and code, and look under the hood just enough to understand what they can and cannot do.",
		learning_points: &[
			"What a large language model actually is, minus the hype.",
			"Hands-on sessions with text and image generation tools.",
			"How agents chain model calls together to get work done.",
			"Where generative AI fails, and how to spot it.",
			"Using AI tools responsibly for schoolwork and projects."
		],
		key_takeaways: &[
			"First-hand experience with several generative tools.",
			"A realistic mental model of AI strengths and limits.",
			"Ideas for using AI in your own studies and projects."
		],
		audience: "Students curious about AI, no math background needed",
		prerequisites: "None beyond basic computer use.",
		duration: "1 day, 4 hours",
		format: "Live demos and guided experimentation in pairs.",
		gallery: &[
			GalleryImage { src: "https://placehold.co/800x600/a855f7/ffffff?text=AI+Art+Session", alt: "AI art session" },
			GalleryImage { src: "https://placehold.co/800x600/f59e0b/ffffff?text=Agent+Demo", alt: "Agent demo" }
		],
		trainer: Trainer {
			name: "Ayush Verma",
			role: "Full Stack Developer & AI Instructor",
			bio: "Ayush keeps one foot in web development and one in applied AI, and runs the most-requested session of every tech fest we've done.",
			image: "https://placehold.co/128x128/d1fae5/065f46?text=Ayush"
		},
		accent: "#a855f7"
	},
	Workshop {
		slug: "ml-robotics",
		title: "Machine Learning & Robotics",
		blurb: "Build and program smart robots. Learn simple AI and hardware programming.",
		intro: "Wire up sensors, write the logic, and watch a robot you built follow a line across the floor. Then teach it to do better with simple machine learning.",
		learning_points: &[
			"Microcontroller basics with Arduino-class boards.",
			"Reading sensors and driving motors from code.",
			"Building a line-following robot from a kit.",
			"Training a tiny classifier and putting it on the robot.",
			"Debugging hardware when nothing works (it won't, at first)."
		],
		key_takeaways: &[
			"A working robot your team assembled and programmed.",
			"The confidence that hardware isn't magic.",
			"A first taste of applied machine learning."
		],
		audience: "Students who like building things with their hands",
		prerequisites: "No prior electronics experience required.",
		duration: "3 days, 3 hours per day",
		format: "Team-based build sessions with a closing robot race.",
		gallery: &[
			GalleryImage { src: "https://placehold.co/800x600/ef4444/ffffff?text=Robot+Build", alt: "Robot build table" },
			GalleryImage { src: "https://placehold.co/800x600/3b82f6/ffffff?text=Line+Follower", alt: "Line follower run" },
			GalleryImage { src: "https://placehold.co/800x600/10b981/ffffff?text=Team+Debugging", alt: "Team debugging" }
		],
		trainer: Trainer {
			name: "Suraj Kumar",
			role: "Curriculum Developer & Robotics Mentor",
			bio: "Suraj has coached school robotics teams for years and still thinks the best sound in the world is a room cheering for a robot that finally turns left.",
			image: "https://placehold.co/128x128/fce7f3/831843?text=Suraj"
		},
		accent: "#ef4444"
	},
	Workshop {
		slug: "python-programming",
		title: "Python Programming",
		blurb: "Learn Python by creating games and solving puzzles. Easy syntax and beginner-friendly.",
		intro: "Start from zero and leave having written real programs: games, puzzle solvers and small tools you can show off.",
		learning_points: &[
			"Variables, loops and conditionals without the jargon.",
			"Functions and how to split a problem into pieces.",
			"Lists and dictionaries for organizing data.",
			"Building a terminal game step by step.",
			"Reading error messages instead of fearing them.",
			"Where to go next: scripts, web, data, anything."
		],
		key_takeaways: &[
			"Several small programs written entirely by you.",
			"Enough Python to keep learning on your own.",
			"A taste of how programmers actually think."
		],
		audience: "Complete beginners welcome",
		prerequisites: "None. Bring curiosity.",
		duration: "2 days, 3 hours per day",
		format: "Code-along sessions with puzzle breaks and a mini project.",
		gallery: &[
			GalleryImage { src: "https://placehold.co/800x600/eab308/ffffff?text=First+Program", alt: "First program moment" },
			GalleryImage { src: "https://placehold.co/800x600/6366f1/ffffff?text=Pair+Coding", alt: "Pair coding" }
		],
		trainer: Trainer {
			name: "Satyam Srivastava",
			role: "Founder & Lead Instructor",
			bio: "Satyam has taught Python to hundreds of first-time programmers and insists that everyone's first bug deserves a round of applause.",
			image: "https://placehold.co/128x128/dbeafe/1e40af?text=Satyam"
		},
		accent: "#eab308"
	},
	Workshop {
		slug: "google-dorking",
		title: "Google Dorking (Advanced Search)",
		blurb: "Learn powerful Google search tricks to find public data ethically.",
		intro: "Most people use a tenth of what a search engine can do. Learn the operators researchers and security analysts use to find exactly what's public - and only what's public.",
		learning_points: &[
			"Search operators: site, filetype, intitle, inurl and friends.",
			"Combining operators into precise queries.",
			"Finding public datasets, papers and archived pages.",
			"What dorking reveals about careless data exposure.",
			"The ethics and law of searching public information."
		],
		key_takeaways: &[
			"A personal cheat-sheet of advanced search patterns.",
			"Sharper research skills for any subject.",
			"A healthy respect for what ends up public online."
		],
		audience: "Anyone who uses a search engine (so, everyone)",
		prerequisites: "None.",
		duration: "1 day, 3 hours",
		format: "Live search challenges with a scoreboard.",
		gallery: &[
			GalleryImage { src: "https://placehold.co/800x600/6366f1/ffffff?text=Search+Challenge", alt: "Search challenge round" }
		],
		trainer: Trainer {
			name: "Satyam Srivastava",
			role: "Certified Ethical Hacker & Security Analyst",
			bio: "Satyam teaches dorking as the gateway drug to security research: no tools to install, just sharper questions.",
			image: "https://placehold.co/128x128/dbeafe/1e40af?text=Satyam"
		},
		accent: "#6366f1"
	},
	Workshop {
		slug: "prompt-engineering",
		title: "Prompt Engineering",
		blurb: "Master the art of writing effective prompts to get better responses from AI tools.",
		intro: "The difference between a useless AI answer and a great one is usually the question. Learn to write prompts that get you what you actually wanted.",
		learning_points: &[
			"Why the same model gives wildly different answers.",
			"Roles, constraints and examples as prompt building blocks.",
			"Iterating on a prompt instead of giving up on it.",
			"Prompting for study help, writing and code.",
			"Judging AI output critically before trusting it."
		],
		key_takeaways: &[
			"A toolbox of prompt patterns that transfer across tools.",
			"Noticeably better results from the AI tools you already use.",
			"Habits for verifying what a model tells you."
		],
		audience: "Students already playing with AI chatbots",
		prerequisites: "Having used any AI chat tool at least once.",
		duration: "1 day, 3 hours",
		format: "Prompt duels: same task, best result wins.",
		gallery: &[
			GalleryImage { src: "https://placehold.co/800x600/ec4899/ffffff?text=Prompt+Duel", alt: "Prompt duel in progress" }
		],
		trainer: Trainer {
			name: "Ayush Verma",
			role: "Full Stack Developer & AI Instructor",
			bio: "Ayush collects failed prompts the way other people collect stamps, and every one of them is a lesson in this workshop.",
			image: "https://placehold.co/128x128/d1fae5/065f46?text=Ayush"
		},
		accent: "#ec4899"
	},
	Workshop {
		slug: "web-development",
		title: "Web Development",
		blurb: "Build and publish your first real website with HTML, CSS and a dash of JavaScript.",
		intro: "Go from a blank editor to a live page on the internet. Structure with HTML, style with CSS, and add just enough JavaScript to make it yours.",
		learning_points: &[
			"HTML structure: headings, lists, links and images.",
			"CSS for layout, color and responsive design.",
			"A first taste of JavaScript interactivity.",
			"Putting a page live with free hosting.",
			"Reading other sites' source to keep learning."
		],
		key_takeaways: &[
			"A personal page, live on the internet, built by you.",
			"The core mental model behind every website you visit.",
			"A base to grow toward app or full-stack development."
		],
		audience: "Students who want something real to show for a weekend",
		prerequisites: "Basic computer literacy.",
		duration: "2 days, 3 hours per day",
		format: "Build-your-own-site sessions with design critiques.",
		gallery: &[
			GalleryImage { src: "https://placehold.co/800x600/92400e/ffffff?text=First+Deploy", alt: "First deploy" },
			GalleryImage { src: "https://placehold.co/800x600/3b82f6/ffffff?text=Design+Critique", alt: "Design critique" }
		],
		trainer: Trainer {
			name: "Ayush Verma",
			role: "Full Stack Developer & AI Instructor",
			bio: "Ayush has shipped sites for startups and NGOs alike, and still remembers the thrill of his own first deploy going live.",
			image: "https://placehold.co/128x128/d1fae5/065f46?text=Ayush"
		},
		accent: "#92400e"
	},
	Workshop {
		slug: "app-development",
		title: "App Development",
		blurb: "Prototype a mobile app from idea to clickable demo in a weekend.",
		intro: "Take an idea from a sketch on paper to a clickable app prototype, and learn what it takes to make it real afterwards.",
		learning_points: &[
			"Turning an idea into screens and flows on paper first.",
			"Prototyping interactive screens with no-code tools.",
			"What native, hybrid and web apps actually mean.",
			"A guided tour of real app code to demystify it.",
			"Pitching your prototype in two minutes flat."
		],
		key_takeaways: &[
			"A clickable prototype of your own app idea.",
			"A realistic roadmap from prototype to published app.",
			"Pitching practice in front of a friendly room."
		],
		audience: "Idea-havers, designers and future founders",
		prerequisites: "None.",
		duration: "2 days, 3 hours per day",
		format: "Team sprints ending in demo pitches.",
		gallery: &[
			GalleryImage { src: "https://placehold.co/800x600/64748b/ffffff?text=Paper+Prototypes", alt: "Paper prototypes" },
			GalleryImage { src: "https://placehold.co/800x600/ec4899/ffffff?text=Demo+Pitch", alt: "Demo pitch" }
		],
		trainer: Trainer {
			name: "Suraj Kumar",
			role: "Curriculum Developer & Mentor",
			bio: "Suraj has mentored dozens of student teams from first sketch to demo day and judges exactly one thing: did you ship?",
			image: "https://placehold.co/128x128/fce7f3/831843?text=Suraj"
		},
		accent: "#64748b"
	}
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slugs_are_unique() {
		for (i, a) in WORKSHOPS.iter().enumerate() {
			for b in &WORKSHOPS[i + 1..] {
				assert_ne!(a.slug, b.slug);
			}
		}
	}

	#[test]
	fn every_workshop_is_findable_by_slug() {
		for workshop in WORKSHOPS {
			let found = workshop_by_slug(workshop.slug).expect("slug should resolve");
			assert_eq!(found.title, workshop.title);
		}
		assert!(workshop_by_slug("underwater-basket-weaving").is_none());
	}

	#[test]
	fn the_full_catalog_is_offered() {
		// The whole point of the catalog is that the registration form and
		// the detail pages agree on what can be picked
		assert_eq!(WORKSHOPS.len(), 9);
		for workshop in WORKSHOPS {
			assert!(!workshop.title.trim().is_empty());
			assert!(!workshop.learning_points.is_empty());
		}
	}
}

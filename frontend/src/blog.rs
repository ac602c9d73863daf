use yew::prelude::*;

struct BlogPost {
	title: &'static str,
	date: &'static str,
	author: &'static str,
	excerpt: &'static str,
	image: &'static str
}

static BLOG_POSTS: &[BlogPost] = &[
	BlogPost {
		title: "Getting Started with Web Interfaces: A Beginner's Guide",
		date: "May 10, 2025",
		author: "Satyam Srivastava",
		excerpt: "Learn the fundamentals of building interactive user interfaces, from components \
		          and state to your first deployed page.",
		image: "https://placehold.co/600x400/bfdbfe/1d4ed8?text=UI+Basics"
	},
	BlogPost {
		title: "The Future of AI in Web Development",
		date: "May 05, 2025",
		author: "Ayush Verma",
		excerpt: "Explore how artificial intelligence is shaping the future of web development, \
		          from automated coding to personalized user experiences.",
		image: "https://placehold.co/600x400/a5b4fc/312e81?text=AI+in+Web+Dev"
	},
	BlogPost {
		title: "Top 5 Cybersecurity Tips for Students",
		date: "April 28, 2025",
		author: "Suraj Kumar",
		excerpt: "Protect yourself online with these essential cybersecurity tips tailored for \
		          students navigating the digital world.",
		image: "https://placehold.co/600x400/fbcfe8/831843?text=Cybersecurity+Tips"
	},
	BlogPost {
		title: "Why Project-Based Learning is Key in Tech Education",
		date: "April 15, 2025",
		author: "Priya Sharma (Guest Author)",
		excerpt: "Discover the benefits of project-based learning and how it helps in developing \
		          practical skills for the tech industry.",
		image: "https://placehold.co/600x400/d1fae5/065f46?text=Project+Learning"
	}
];

#[function_component(Blog)]
pub fn blog() -> Html {
	html! {
		<>
			<style>
			{
				"
				.blog-intro {
					text-align: center;
					max-width: 640px;
					margin: 0 auto 20px auto;
					color: var(--secondary-text);
				}
				.blog-grid {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
					gap: 14px;
				}
				.blog-card img {
					width: 100%;
					border-radius: 8px;
				}
				.blog-byline {
					color: var(--secondary-text);
					font-size: 14px;
				}
				"
			}
			</style>
			<section class="page-section">
				<h1 class="page-title">{ "XyberWeb Tech Blog" }</h1>
				<p class="blog-intro">
					{ "Stay updated with the latest articles, tutorials, and insights from the \
					   XyberWeb team and guest authors. We cover topics ranging from web \
					   development and AI to cybersecurity and career advice." }
				</p>
				<div class="blog-grid">
					{
						BLOG_POSTS.iter().map(|post| html! {
							<div class="card blog-card" key={ post.title }>
								<img src={ post.image } alt={ post.title } />
								<h3>{ post.title }</h3>
								<p class="blog-byline">{ format!("{} · {}", post.date, post.author) }</p>
								<p>{ post.excerpt }</p>
							</div>
						}).collect::<Html>()
					}
				</div>
			</section>
		</>
	}
}

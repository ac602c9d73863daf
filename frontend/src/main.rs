use yew_router::prelude::*;
use yew::prelude::*;
use about::About;
use blog::Blog;
use contact::Contact;
use feedback::Feedback;
use gallery::Gallery;
use home::Home;
use nav::{Footer, Navbar};
use notify::{NoticeStack, Notices, NoticesHandle};
use register::RegisterPage;
use style::SharedStyle;
use theme::ThemeProvider;
use workshop::WorkshopDetail;
use workshops::Workshops;

mod about;
mod blog;
mod contact;
mod deliver;
mod feedback;
mod gallery;
mod home;
mod modal;
mod nav;
mod notify;
mod register;
mod style;
mod theme;
mod workshop;
mod workshops;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
	#[not_found]
	#[at("/")]
	Home,
	#[at("/workshops")]
	Workshops,
	#[at("/workshops/:slug")]
	Workshop { slug: String },
	#[at("/gallery")]
	Gallery,
	#[at("/blog")]
	Blog,
	#[at("/feedback")]
	Feedback,
	#[at("/contact")]
	Contact,
	#[at("/about")]
	About,
	#[at("/register")]
	Register
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> },
		Route::Workshops => html! { <Workshops /> },
		Route::Workshop { slug } => html! { <WorkshopDetail slug={ slug } /> },
		Route::Gallery => html! { <Gallery /> },
		Route::Blog => html! { <Blog /> },
		Route::Feedback => html! { <Feedback /> },
		Route::Contact => html! { <Contact /> },
		Route::About => html! { <About /> },
		Route::Register => html! { <RegisterPage /> }
	}
}

#[function_component(App)]
pub fn app() -> Html {
	// One notice stack for the whole app so every page's forms toast into
	// the same corner
	let notices = use_reducer_eq(NoticeStack::default);

	html! {
		<BrowserRouter>
			<ThemeProvider>
				<ContextProvider<NoticesHandle> context={ notices }>
					<SharedStyle />
					<Navbar />
					<main id="main-content">
						<Switch<Route> render={ switch } />
					</main>
					<Footer />
					<Notices />
				</ContextProvider<NoticesHandle>>
			</ThemeProvider>
		</BrowserRouter>
	}
}

fn main() {
	yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use yew_router::prelude::*;
use gloo_console::log;

use crate::{
	theme::{Theme, ThemeContext},
	Route
};

fn nav_links() -> [(Route, &'static str); 8] {
	[
		(Route::Home, "Home"),
		(Route::Workshops, "Workshops"),
		(Route::Gallery, "Gallery"),
		(Route::Blog, "Blog"),
		(Route::Feedback, "Feedback"),
		(Route::Contact, "Contact"),
		(Route::About, "About"),
		(Route::Register, "Register")
	]
}

// The old mobile-menu trick: freeze the page behind the overlay. The modal
// uses it too.
pub(crate) fn set_body_scroll_locked(locked: bool) {
	let Some(body) = web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.body())
	else {
		return;
	};

	let value = if locked { "hidden" } else { "" };
	if let Err(e) = body.style().set_property("overflow", value) {
		log!("Couldn't toggle body scroll: ", e);
	}
}

#[function_component(ThemeSwitcher)]
fn theme_switcher() -> Html {
	let Some(ctx) = use_context::<ThemeContext>() else {
		return html! {};
	};

	html! {
		<div class="theme-switcher">
			{
				[Theme::Light, Theme::Dark, Theme::System].into_iter().map(|mode| {
					let set = ctx.set.clone();
					let glyph = match mode {
						Theme::Light => "☀",
						Theme::Dark => "☾",
						Theme::System => "⚙"
					};

					html! {
						<button
							class={ if ctx.theme == mode { "theme-button active" } else { "theme-button" } }
							aria-label={ format!("Switch to {} mode", mode.as_str()) }
							onclick={ Callback::from(move |_| set.emit(mode)) }
						>
							{ glyph }
						</button>
					}
				}).collect::<Html>()
			}
		</div>
	}
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
	let mobile_open = use_state_eq(|| false);
	let current = use_route::<Route>();

	// Keep the page from scrolling underneath the open menu
	{
		let open = *mobile_open;
		use_effect_with(open, move |_| {
			set_body_scroll_locked(open);
			move || set_body_scroll_locked(false)
		});
	}

	// Navigating closes the menu; the links themselves don't need to know
	{
		let mobile_open = mobile_open.clone();
		use_effect_with(current.clone(), move |_| mobile_open.set(false));
	}

	let links = |current: &Option<Route>| nav_links().into_iter().map(|(route, label)| {
		let class = if current.as_ref() == Some(&route) {
			"navbar-link navbar-link-active"
		} else {
			"navbar-link"
		};

		html! {
			<Link<Route> to={ route } classes={ class }>{ label }</Link<Route>>
		}
	}).collect::<Html>();

	let toggle = {
		let mobile_open = mobile_open.clone();
		Callback::from(move |_| mobile_open.set(!*mobile_open))
	};

	html! {
		<nav id="navbar">
			<Link<Route> to={ Route::Home } classes="navbar-brand">
				<span id="navbar-brand">{ "XyberWeb" }</span>
			</Link<Route>>
			<div id="navbar-links">
				{ links(&current) }
				<ThemeSwitcher />
			</div>
			<button
				id="mobile-menu-button"
				aria-label="Toggle main menu"
				aria-expanded={ if *mobile_open { "true" } else { "false" } }
				onclick={ toggle }
			>
				{ if *mobile_open { "✕" } else { "☰" } }
			</button>
			{
				if *mobile_open {
					html! {
						<div id="mobile-menu">
							{ links(&current) }
							<ThemeSwitcher />
						</div>
					}
				} else {
					html! {}
				}
			}
		</nav>
	}
}

#[function_component(Footer)]
pub fn footer() -> Html {
	let year = js_sys::Date::new_0().get_full_year();

	html! {
		<footer id="footer">
			<p>{ format!("© {year} XyberWeb-Patna. All rights reserved.") }</p>
			<p>{ "Empowering Bihar's future tech leaders." }</p>
		</footer>
	}
}

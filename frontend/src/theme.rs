use yew::prelude::*;
use gloo_console::log;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{MediaQueryList, Storage};

// localStorage key the preference lives under. Same one the site has always
// used, so an existing preference carries over.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	Light,
	Dark,
	#[default]
	System
}

impl Theme {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
			Self::System => "system"
		}
	}

	// Parses a stored preference, falling back to System for anything we
	// don't recognize (including nothing stored at all)
	#[must_use]
	pub fn from_stored(value: Option<&str>) -> Self {
		match value {
			Some("light") => Self::Light,
			Some("dark") => Self::Dark,
			_ => Self::System
		}
	}
}

fn storage() -> Option<Storage> {
	web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

fn media_query() -> Option<MediaQueryList> {
	web_sys::window()
		.and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
}

fn system_prefers_dark() -> bool {
	media_query().is_some_and(|mq| mq.matches())
}

// Read once when the app starts; after that the provider below is the only
// thing that writes the key.
pub fn stored_theme() -> Theme {
	let value = storage().and_then(|s| s.get_item(THEME_KEY).ok().flatten());
	Theme::from_stored(value.as_deref())
}

// Swaps the light/dark class on the document element and persists the
// preference itself, so System stays System across reloads instead of
// collapsing into whatever it resolved to today.
fn apply_theme(theme: Theme) {
	let Some(root) = web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.document_element())
	else {
		log!("No document element to apply the theme to");
		return;
	};

	let class_list = root.class_list();
	let _ = class_list.remove_2("light", "dark");

	let effective = match theme {
		Theme::System if system_prefers_dark() => "dark",
		Theme::System => "light",
		other => other.as_str()
	};

	if let Err(e) = class_list.add_1(effective) {
		log!("Couldn't set theme class: ", e);
	}

	if let Some(storage) = storage() {
		let _ = storage.set_item(THEME_KEY, theme.as_str());
	}
}

// What pages get out of the context: the current preference, and the one
// callback that's allowed to change it.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
	pub theme: Theme,
	pub set: Callback<Theme>
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
	pub children: Children
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
	let theme = use_state_eq(stored_theme);

	{
		let theme = *theme;
		use_effect_with(theme, move |_| apply_theme(theme));
	}

	// While the preference is System, re-resolve whenever the OS scheme
	// flips under us
	use_effect_with((), move |_| {
		let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |_| {
			if stored_theme() == Theme::System {
				apply_theme(Theme::System);
			}
		});

		let mq = media_query();
		if let Some(mq) = &mq {
			let listen = mq.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
			if let Err(e) = listen {
				log!("Couldn't listen for scheme changes: ", e);
			}
		}

		move || {
			if let Some(mq) = mq {
				let _ = mq.remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
			}
		}
	});

	let set = {
		let theme = theme.clone();
		Callback::from(move |new_theme| theme.set(new_theme))
	};

	let ctx = ThemeContext { theme: *theme, set };

	html! {
		<ContextProvider<ThemeContext> context={ ctx }>
			{ for props.children.iter() }
		</ContextProvider<ThemeContext>>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stored_strings_round_trip() {
		for theme in [Theme::Light, Theme::Dark, Theme::System] {
			assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
		}
	}

	#[test]
	fn unknown_values_fall_back_to_system() {
		assert_eq!(Theme::from_stored(None), Theme::System);
		assert_eq!(Theme::from_stored(Some("")), Theme::System);
		assert_eq!(Theme::from_stored(Some("solarized")), Theme::System);
	}
}

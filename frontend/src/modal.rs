use yew::prelude::*;

use crate::nav::set_body_scroll_locked;

// The one modal. Pages hand it whatever content they want overlaid; it owns
// the dimmed backdrop, the close button and the scroll lock.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
	pub open: bool,
	pub on_close: Callback<()>,
	pub children: Children
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
	{
		let open = props.open;
		use_effect_with(open, move |_| {
			set_body_scroll_locked(open);
			// If the whole page goes away while we're open, unfreeze it
			move || set_body_scroll_locked(false)
		});
	}

	if !props.open {
		return html! {};
	}

	let close = props.on_close.clone();

	html! {
		<div class="modal-overlay">
			<div class="modal-content">
				<button
					class="modal-close-button"
					aria-label="Close"
					onclick={ Callback::from(move |_| close.emit(())) }
				>
					{ "✕" }
				</button>
				{ for props.children.iter() }
			</div>
		</div>
	}
}

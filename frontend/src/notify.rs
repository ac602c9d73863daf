use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;

// How long a notice stays up before dismissing itself
const NOTICE_LIFETIME_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
	Pending,
	Success,
	Error
}

impl NoticeKind {
	fn class(self) -> &'static str {
		match self {
			Self::Pending => "notice notice-pending",
			Self::Success => "notice notice-success",
			Self::Error => "notice notice-error"
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
	pub id: Uuid,
	pub kind: NoticeKind,
	pub text: String
}

// Every notice currently on screen, oldest first. There's no history: once
// a notice is dismissed it's gone for good.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeStack {
	pub notices: Vec<Notice>
}

pub enum NoticeMsg {
	Push(Notice),
	Dismiss(Uuid)
}

impl Reducible for NoticeStack {
	type Action = NoticeMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut notices = self.notices.clone();

		match action {
			NoticeMsg::Push(notice) => notices.push(notice),
			// Dismissing something that already auto-dismissed is fine
			NoticeMsg::Dismiss(id) => notices.retain(|n| n.id != id)
		}

		Self { notices }.into()
	}
}

pub type NoticesHandle = UseReducerHandle<NoticeStack>;

// Puts a notice up and schedules it to take itself back down. Clicking it
// dismisses it early; either way the second dismissal is a no-op.
pub fn push_notice(handle: &NoticesHandle, kind: NoticeKind, text: impl Into<String>) {
	let id = Uuid::new_v4();
	handle.dispatch(NoticeMsg::Push(Notice { id, kind, text: text.into() }));

	let handle = handle.clone();
	wasm_bindgen_futures::spawn_local(async move {
		TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
		handle.dispatch(NoticeMsg::Dismiss(id));
	});
}

#[function_component(Notices)]
pub fn notices() -> Html {
	let Some(handle) = use_context::<NoticesHandle>() else {
		return html! {};
	};

	html! {
		<div id="notices">
			{
				handle.notices.iter().map(|notice| {
					let id = notice.id;
					let dismiss = handle.clone();

					html! {
						<div
							key={ id.to_string() }
							class={ notice.kind.class() }
							onclick={ Callback::from(move |_| dismiss.dispatch(NoticeMsg::Dismiss(id))) }
						>
							{ &notice.text }
						</div>
					}
				}).collect::<Html>()
			}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn reduce(stack: NoticeStack, msg: NoticeMsg) -> NoticeStack {
		Rc::new(stack).reduce(msg).as_ref().clone()
	}

	fn notice(kind: NoticeKind, text: &str) -> Notice {
		Notice { id: Uuid::new_v4(), kind, text: text.into() }
	}

	#[test]
	fn notices_stack_in_order() {
		let mut stack = NoticeStack::default();
		stack = reduce(stack, NoticeMsg::Push(notice(NoticeKind::Pending, "sending")));
		stack = reduce(stack, NoticeMsg::Push(notice(NoticeKind::Success, "sent")));

		assert_eq!(stack.notices.len(), 2);
		assert_eq!(stack.notices[0].text, "sending");
		assert_eq!(stack.notices[1].text, "sent");
	}

	#[test]
	fn dismiss_removes_exactly_one() {
		let first = notice(NoticeKind::Error, "nope");
		let second = notice(NoticeKind::Success, "yep");
		let first_id = first.id;

		let mut stack = NoticeStack::default();
		stack = reduce(stack, NoticeMsg::Push(first));
		stack = reduce(stack, NoticeMsg::Push(second));
		stack = reduce(stack, NoticeMsg::Dismiss(first_id));

		assert_eq!(stack.notices.len(), 1);
		assert_eq!(stack.notices[0].text, "yep");
	}

	#[test]
	fn dismissing_an_unknown_id_changes_nothing() {
		let mut stack = NoticeStack::default();
		stack = reduce(stack, NoticeMsg::Push(notice(NoticeKind::Pending, "here")));
		stack = reduce(stack, NoticeMsg::Dismiss(Uuid::new_v4()));

		assert_eq!(stack.notices.len(), 1);
	}
}

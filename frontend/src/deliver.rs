use std::fmt;

use futures::{select, FutureExt, pin_mut};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::FormData;

// The spreadsheet script every form on this site posts to. It takes flat
// form fields and appends a row somewhere we can't see; there's nothing
// useful in its response body, so callers only learn whether the POST went
// through at all.
pub const FORM_ENDPOINT: &str =
	"https://script.google.com/macros/s/AKfycbzYJSv_r4Uqv98kLfFzwPxuYSPs-HV2XWlGLu5XTlVwT0ptJAjAQ_uWvX2lYi9KLRD22A/exec";

// How long a submission may stay in flight before we give up on it. The
// endpoint has no SLA, and an attempt that never resolves would otherwise
// leave the form stuck in its pending state forever.
const DELIVERY_TIMEOUT_MS: u32 = 15_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryError {
	// We couldn't even build the request
	Preflight(String),
	// The fetch itself fell over (network down, endpoint unreachable)
	Net(String),
	// The endpoint answered, but not with an ok status
	Status(u16),
	// Nothing came back in time
	TimedOut
}

impl fmt::Display for DeliveryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Preflight(err) => write!(f, "couldn't prepare the request: {err}"),
			Self::Net(err) => write!(f, "request failed: {err}"),
			Self::Status(code) => write!(f, "endpoint answered with status {code}"),
			Self::TimedOut => write!(f, "no answer within {DELIVERY_TIMEOUT_MS}ms")
		}
	}
}

async fn post_fields(fields: &[(&'static str, String)]) -> Result<(), DeliveryError> {
	let form = FormData::new()
		.map_err(|e| DeliveryError::Preflight(format!("{e:?}")))?;

	for (name, value) in fields {
		form.append_with_str(name, value)
			.map_err(|e| DeliveryError::Preflight(format!("{e:?}")))?;
	}

	let request = Request::post(FORM_ENDPOINT)
		.body(form)
		.map_err(|e| DeliveryError::Preflight(format!("{e:?}")))?;

	match request.send().await {
		Ok(res) if res.ok() => Ok(()),
		Ok(res) => Err(DeliveryError::Status(res.status())),
		Err(err) => Err(DeliveryError::Net(format!("{err:?}")))
	}
}

// Posts the fields, but never hangs: if the endpoint hasn't answered after
// DELIVERY_TIMEOUT_MS this resolves to TimedOut and whatever the fetch
// eventually does is ignored.
pub async fn post_form(fields: &[(&'static str, String)]) -> Result<(), DeliveryError> {
	let send = post_fields(fields).fuse();
	let deadline = TimeoutFuture::new(DELIVERY_TIMEOUT_MS).fuse();
	pin_mut!(send, deadline);

	select! {
		res = send => res,
		() = deadline => Err(DeliveryError::TimedOut)
	}
}

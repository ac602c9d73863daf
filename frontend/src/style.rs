use yew::prelude::*;

// One stylesheet for the chrome every page shares. The light/dark classes
// land on the document element (see theme.rs), so everything themes off
// these variables.
pub static BASE_STYLE: &str = r#"
html.light {
	--body-background: #f4f6fb;
	--main-text: #1f2430;
	--secondary-text: #5b6575;
	--card-background: #ffffff;
	--border-color: #d5dae4;
	--accent: #2563eb;
	--accent-text: #ffffff;
}
html.dark {
	--body-background: #171b24;
	--main-text: #e8ecf4;
	--secondary-text: #9aa5b8;
	--card-background: #202634;
	--border-color: #394153;
	--accent: #60a5fa;
	--accent-text: #10141c;
}
* {
	font-family: Arial, Helvetica, sans-serif;
	box-sizing: border-box;
}
body {
	margin: 0;
	background-color: var(--body-background);
	color: var(--main-text);
}
a {
	color: var(--accent);
}
h1, h2, h3, h4 {
	color: var(--main-text);
}
input, textarea {
	background-color: var(--card-background);
	color: var(--main-text);
	border: 1px solid var(--border-color);
	border-radius: 4px;
	padding: 8px 10px;
	width: 100%;
}
button {
	background-color: var(--accent);
	color: var(--accent-text);
	border: 1px solid var(--accent);
	border-radius: 4px;
	padding: 8px 14px;
	cursor: pointer;
}
button:disabled {
	opacity: 0.6;
	cursor: not-allowed;
}
#main-content {
	min-height: 70vh;
	padding: 16px;
}
.page-section {
	max-width: 960px;
	margin: 0 auto;
	padding: 16px 0;
}
.page-title {
	text-align: center;
}
.card {
	background-color: var(--card-background);
	border: 1px solid var(--border-color);
	border-radius: 8px;
	padding: 16px 20px;
	margin: 12px 0;
}

/* navbar */
#navbar {
	background-color: var(--card-background);
	border-bottom: 1px solid var(--border-color);
	padding: 10px 16px;
	display: flex;
	align-items: center;
	justify-content: space-between;
	flex-wrap: wrap;
}
#navbar-brand {
	font-size: 22px;
	font-weight: bold;
	text-decoration: none;
	color: var(--main-text);
}
#navbar-links {
	display: none;
}
.navbar-link {
	margin: 0 6px;
	text-decoration: none;
	color: var(--secondary-text);
	padding: 4px 6px;
	border-radius: 4px;
}
.navbar-link-active {
	color: var(--accent);
	font-weight: bold;
}
.theme-switcher {
	display: inline-block;
	margin-left: 8px;
}
.theme-button {
	background: none;
	color: var(--secondary-text);
	border: 1px solid transparent;
	padding: 2px 6px;
	margin: 0 1px;
}
.theme-button.active {
	border-color: var(--accent);
	color: var(--accent);
	border-radius: 4px;
}
#mobile-menu-button {
	background: none;
	border: none;
	color: var(--main-text);
	font-size: 22px;
}
#mobile-menu {
	width: 100%;
	display: flex;
	flex-direction: column;
	padding: 8px 0;
}
#mobile-menu .navbar-link {
	padding: 10px 6px;
	border-bottom: 1px solid var(--border-color);
}
@media (min-width: 768px) {
	#navbar-links {
		display: flex;
		align-items: center;
	}
	#mobile-menu-button, #mobile-menu {
		display: none;
	}
}

/* footer */
#footer {
	border-top: 1px solid var(--border-color);
	text-align: center;
	padding: 16px;
	color: var(--secondary-text);
}

/* forms */
.form-group {
	margin-bottom: 14px;
}
.form-group label {
	display: block;
	margin-bottom: 4px;
	color: var(--secondary-text);
}
.registration-form, .contact-form, .feedback-form {
	max-width: 640px;
	margin: 0 auto;
	background-color: var(--card-background);
	border: 1px solid var(--border-color);
	border-radius: 8px;
	padding: 20px;
}
.workshop-picker {
	border: 1px solid var(--border-color);
	border-radius: 4px;
	margin: 0 0 14px 0;
}
.workshop-option {
	display: block;
	padding: 3px 0;
}
.workshop-option input {
	width: auto;
	margin-right: 8px;
}

/* notices */
#notices {
	position: fixed;
	bottom: 16px;
	right: 16px;
	display: flex;
	flex-direction: column;
	gap: 8px;
	z-index: 100;
}
.notice {
	padding: 10px 16px;
	border-radius: 6px;
	border: 1px solid var(--border-color);
	background-color: var(--card-background);
	cursor: pointer;
	max-width: 320px;
}
.notice-pending {
	border-left: 4px solid var(--accent);
}
.notice-success {
	border-left: 4px solid #16a34a;
}
.notice-error {
	border-left: 4px solid #dc2626;
}

/* modal */
.modal-overlay {
	position: fixed;
	inset: 0;
	background-color: rgba(0, 0, 0, 0.6);
	display: flex;
	align-items: center;
	justify-content: center;
	z-index: 50;
}
.modal-content {
	position: relative;
	background-color: var(--card-background);
	border-radius: 8px;
	padding: 24px;
	max-width: 680px;
	width: calc(100% - 32px);
	max-height: 85vh;
	overflow-y: auto;
}
.modal-close-button {
	position: absolute;
	top: 8px;
	right: 8px;
	background: none;
	border: none;
	color: var(--secondary-text);
	font-size: 18px;
}
"#;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! { <style>{ BASE_STYLE }</style> }
}

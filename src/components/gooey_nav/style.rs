//! Stylesheet injected alongside the navigation bar.
//!
//! The highlight surface is blurred and alpha-thresholded through the
//! `#gooey-nav-filter` SVG filter, which melts the pill and its particles
//! together. Particles read their trajectory from the custom properties set
//! per particle (`--start-x`, `--end-x`, `--rotate`, ...).

/// Id of the SVG filter referenced by the highlight surface.
pub const FILTER_ID: &str = "gooey-nav-filter";

pub const GOOEY_NAV_CSS: &str = r#"
.gooey-nav-container {
	position: relative;
	display: flex;
	justify-content: center;
}
.gooey-nav-container nav {
	display: flex;
	position: relative;
	transform: translate3d(0, 0, 0.01px);
}
.gooey-nav-container nav ul {
	display: flex;
	gap: 2em;
	list-style: none;
	padding: 0 1em;
	margin: 0;
	position: relative;
	z-index: 3;
	color: white;
	text-shadow: 0 1px 1px hsl(205deg 30% 10% / 0.2);
}
.gooey-nav-container nav ul li {
	border-radius: 100vw;
	position: relative;
	cursor: pointer;
	transition: background-color 0.3s ease, color 0.3s ease, box-shadow 0.3s ease;
	box-shadow: 0 0 0.5px 1.5px transparent;
	color: white;
}
.gooey-nav-container nav ul li a {
	display: inline-block;
	padding: 0.6em 1em;
	color: inherit;
	text-decoration: none;
}
.gooey-nav-container nav ul li:focus-within:has(:focus-visible) {
	box-shadow: 0 0 0.5px 1.5px white;
}
.gooey-nav-container nav ul li::after {
	content: "";
	position: absolute;
	inset: 0;
	border-radius: 8px;
	background: white;
	opacity: 0;
	transform: scale(0);
	transition: all 0.3s ease;
	z-index: -1;
}
.gooey-nav-container nav ul li.active {
	color: black;
	text-shadow: none;
}
.gooey-nav-container nav ul li.active::after {
	opacity: 1;
	transform: scale(1);
}
.gooey-nav-container .effect {
	position: absolute;
	left: 0;
	top: 0;
	width: 0;
	height: 0;
	opacity: 1;
	pointer-events: none;
	display: grid;
	place-items: center;
	z-index: 1;
}
.gooey-nav-container .effect.text {
	color: white;
	transition: color 0.3s ease;
}
.gooey-nav-container .effect.text.active {
	color: black;
}
.gooey-nav-container .effect.filter {
	filter: url(#gooey-nav-filter);
	mix-blend-mode: lighten;
}
.gooey-nav-container .effect.filter::before {
	content: "";
	position: absolute;
	inset: -75px;
	z-index: -2;
	background: black;
}
.gooey-nav-container .effect.filter::after {
	content: "";
	position: absolute;
	inset: 0;
	background: white;
	transform: scale(0);
	opacity: 0;
	z-index: -1;
	border-radius: 100vw;
}
.gooey-nav-container .effect.active::after {
	animation: gooey-pill 0.3s ease both;
}
@keyframes gooey-pill {
	to {
		transform: scale(1);
		opacity: 1;
	}
}
.gooey-nav-container .particle,
.gooey-nav-container .point {
	display: block;
	opacity: 0;
	width: 20px;
	height: 20px;
	border-radius: 100%;
	transform-origin: center;
}
.gooey-nav-container .particle {
	--time: 5s;
	position: absolute;
	top: calc(50% - 8px);
	left: calc(50% - 8px);
	animation: gooey-particle calc(var(--time)) ease 1 -350ms;
}
.gooey-nav-container .point {
	background: var(--color);
	opacity: 1;
	animation: gooey-point calc(var(--time)) ease 1 -350ms;
}
@keyframes gooey-particle {
	0% {
		transform: rotate(0deg) translate(calc(var(--start-x)), calc(var(--start-y)));
		opacity: 1;
		animation-timing-function: cubic-bezier(0.55, 0, 1, 0.45);
	}
	70% {
		transform: rotate(calc(var(--rotate) * 0.5)) translate(calc(var(--end-x) * 1.2), calc(var(--end-y) * 1.2));
		opacity: 1;
		animation-timing-function: ease;
	}
	85% {
		transform: rotate(calc(var(--rotate) * 0.66)) translate(calc(var(--end-x)), calc(var(--end-y)));
		opacity: 1;
	}
	100% {
		transform: rotate(calc(var(--rotate) * 1.2)) translate(calc(var(--end-x) * 0.5), calc(var(--end-y) * 0.5));
		opacity: 1;
	}
}
@keyframes gooey-point {
	0% {
		transform: scale(0);
		opacity: 0;
		animation-timing-function: cubic-bezier(0.55, 0, 1, 0.45);
	}
	25% {
		transform: scale(calc(var(--scale) * 0.25));
	}
	38% {
		opacity: 1;
	}
	65% {
		transform: scale(var(--scale));
		opacity: 1;
		animation-timing-function: ease;
	}
	85% {
		transform: scale(var(--scale));
		opacity: 1;
	}
	100% {
		transform: scale(0);
		opacity: 0;
	}
}
"#;

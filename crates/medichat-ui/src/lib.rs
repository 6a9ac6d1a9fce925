#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
//! Medichat brand mark for Yew front-ends.
//!
//! [`logo`] renders the fixed badge-and-cross graphic into a plain document that
//! can be serialized as SVG markup; [`components`] wraps it as a Yew component.

pub mod components;
pub mod logo;

pub use components::atoms::{LogoProps, MedichatLogoIcon};
pub use logo::{LogoDocument, LogoRequest, LogoShape, ViewBox, render_logo};

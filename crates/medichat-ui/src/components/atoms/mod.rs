//! Shared UI atoms.

pub mod icons;

pub use icons::{LogoProps, MedichatLogoIcon};

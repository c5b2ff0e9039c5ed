//! Templated resume content driven by extracted job signals

pub mod evidence;
pub mod planning;
pub mod reference;
pub mod templates;

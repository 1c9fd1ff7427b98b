#[allow(unused)]
pub mod setup;
#[allow(unused)]
pub mod templates;

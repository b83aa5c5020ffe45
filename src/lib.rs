pub mod components;
pub mod greeting;

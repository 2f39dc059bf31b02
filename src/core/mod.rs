pub mod generator;
pub mod keywords;
pub mod layout;
pub mod mood;
pub mod palette;

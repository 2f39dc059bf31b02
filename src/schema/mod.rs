pub mod mood;
pub mod object;
pub mod request;
pub mod scene;

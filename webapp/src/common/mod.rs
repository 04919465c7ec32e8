pub mod assets;
pub mod dom;
pub mod style;

pub mod classifier;
pub mod content;
pub mod cta;
pub mod error;
pub mod guide;
pub mod model;
pub mod parser;
pub mod persona;
pub mod problems;
pub mod seo;
pub mod template;

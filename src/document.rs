pub mod about;
pub mod product;

pub use about::{read_about, AboutDocument, ABOUT_TITLE};
pub use product::{read_products, EmbeddedProduct, Product};

pub mod a001_product;
pub mod settings;
pub mod u101_recommendation;

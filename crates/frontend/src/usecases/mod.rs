pub mod u101_recommendation;

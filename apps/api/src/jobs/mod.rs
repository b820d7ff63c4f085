pub mod analytics;
pub mod handlers;
pub mod seed;
pub mod store;
pub mod transition;
pub mod validation;
pub mod view;

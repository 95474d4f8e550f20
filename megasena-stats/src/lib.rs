pub mod models;
pub mod normalize;
pub mod frequency;
pub mod window;
pub mod ranking;
pub mod report;

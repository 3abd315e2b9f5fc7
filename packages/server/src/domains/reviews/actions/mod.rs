mod create_review;

pub use create_review::create_review;

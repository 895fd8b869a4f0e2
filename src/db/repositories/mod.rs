pub mod business;
pub mod category;
pub mod complaint;
pub mod review;

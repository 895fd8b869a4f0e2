pub mod error;
pub use error::DirectoryError;

pub mod category_service;
pub mod category_service_impl;
pub use category_service::CategoryService;
pub use category_service_impl::SeaOrmCategoryService;

pub mod business_service;
pub mod business_service_impl;
pub use business_service::BusinessService;
pub use business_service_impl::SeaOrmBusinessService;

pub mod complaint_service;
pub mod complaint_service_impl;
pub use complaint_service::ComplaintService;
pub use complaint_service_impl::SeaOrmComplaintService;

pub mod review_service;
pub mod review_service_impl;
pub use review_service::ReviewService;
pub use review_service_impl::SeaOrmReviewService;

pub mod directory;
pub use directory::{DirectoryLoader, FetchObserver, TracingObserver};

pub mod news;
pub mod resources;

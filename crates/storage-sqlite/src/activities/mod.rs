mod repository;

pub use repository::ActivityRepository;

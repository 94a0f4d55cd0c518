mod repository;

pub use repository::BadgeRepository;

mod repository;

pub use repository::ChallengeRepository;

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod audition_repo;
pub mod blog_repo;
pub mod education_repo;
pub mod experience_repo;
pub mod job_repo;
pub mod portfolio_repo;
pub mod profile_repo;
pub mod session_repo;
pub mod talent_repo;
pub mod user_repo;

pub use audition_repo::AuditionRepo;
pub use blog_repo::BlogRepo;
pub use education_repo::EducationRepo;
pub use experience_repo::ExperienceRepo;
pub use job_repo::JobRepo;
pub use portfolio_repo::PortfolioRepo;
pub use profile_repo::ProfileRepo;
pub use session_repo::SessionRepo;
pub use talent_repo::TalentRepo;
pub use user_repo::UserRepo;

pub mod ai;
pub mod job;
pub mod user;

pub use ai::{PrepRequest, PrepResponse, ResumeRequest, ResumeResponse};
pub use job::{JobApplication, JobFields, JobStatus};
pub use user::{
    AuthResponse, LoginRequest, MessageResponse, Session, SignupRequest, User, VerifyResponse,
};

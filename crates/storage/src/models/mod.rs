pub mod event;
pub mod judge;
pub mod registration;
pub mod reward_tier;
pub mod score;
pub mod user;

pub use event::Event;
pub use judge::Judge;
pub use registration::EventRegistration;
pub use reward_tier::RewardTier;
pub use score::Score;
pub use user::{RewardHistoryEntry, User};

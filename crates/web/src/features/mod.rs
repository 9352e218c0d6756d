pub mod events;
pub mod judges;
pub mod leaderboards;
pub mod registrations;
pub mod rewards;

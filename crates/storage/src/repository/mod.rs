pub mod event;
pub mod judge;
pub mod leaderboard;
pub mod registration;
pub mod score;
pub mod user;

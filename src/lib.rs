// Leaderboard report: local scores and time gaps from leaderboard snapshots

pub mod app;
pub mod core;

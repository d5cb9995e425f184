//! HTTP route handlers

pub mod highscore;
pub mod question;
pub mod runs;

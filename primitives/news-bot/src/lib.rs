//! News Bot - Discord Slash-Command News Board
//!
//! Serves one stored news message through two slash commands:
//!
//! - a query command (`/minimal-tennis-news` by default) that shows the news
//!   with its markup expanded;
//! - `/set-news`, which overwrites the stored text and is limited to server
//!   administrators and an allow-list of user ids.
//!
//! Alongside the chat client the bot runs a tiny HTTP health server and a
//! heartbeat that pings it, so hosting platforms see an open port and a live
//! process.

pub mod auth;
pub mod commands;
pub mod config;
mod error;
pub mod handler;
pub mod health;
pub mod heartbeat;
pub mod reply;

pub use error::BotError;

//! Bankroll Tracker - poker session records with derived results.
//!
//! Players log cash-game sessions (stakes, buy-in, cash-out, hours) and get
//! back net profit and big blinds won per hour, plus an aggregate summary.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;

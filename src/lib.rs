//! Multilingual wedding site with personalized guest invitation links.

pub mod config;
pub mod countdown;
pub mod error;
pub mod guests;
pub mod i18n;
pub mod invitations;
pub mod rsvp;
pub mod text;
pub mod web;

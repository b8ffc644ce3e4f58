//! Remote service and external tool clients.

pub mod html;
pub mod opensubtitles;
pub mod tools;

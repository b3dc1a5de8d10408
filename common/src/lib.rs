pub mod animation;
pub mod config;
pub mod contact;
pub mod games;
pub mod logger;
pub mod theme;

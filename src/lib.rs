//! polyquery - Answer area, extreme, count and overlap queries over a set of integer polygons

pub mod aggregate;
pub mod command;
pub mod config;
pub mod geometry;
pub mod input;

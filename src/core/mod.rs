//! Core utilities shared by the fetch stage
//!
//! - `http`: request header construction for the RapidAPI gateway

pub mod http;

pub use http::rapidapi_header_map;

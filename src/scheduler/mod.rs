//! SM-2 scheduling: quality mapping, interval update, due-date queries.

pub mod due;
pub mod quality;
pub mod sm2;

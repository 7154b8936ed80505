pub mod entities;
pub mod report;
pub mod requests;
pub mod responses;

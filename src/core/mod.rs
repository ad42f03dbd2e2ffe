pub mod app;
pub mod geometry;
pub mod render;
pub mod session;
pub mod table;
pub mod triplets;

pub use crate::domain::model::{Canvas, SearchBound, TriangleSpec, Triplet, TripletRow};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;

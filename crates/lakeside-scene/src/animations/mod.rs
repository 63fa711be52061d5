//! Per-element motion rules and drawing.

pub mod bird;
pub mod cloud;
pub mod fish;
pub mod leaf;
pub mod mountains;

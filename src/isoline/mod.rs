//! 등가탄성계수 이솔라인(등치선) 표와 보간 엔진 모음.

pub mod engine;
pub mod table;

pub use engine::*;
pub use table::*;

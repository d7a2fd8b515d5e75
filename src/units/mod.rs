//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod modulus;

pub use length::{convert_length, LengthUnit};
pub use modulus::{convert_modulus, ModulusUnit};

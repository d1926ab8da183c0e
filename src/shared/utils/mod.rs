/// 공유 유틸리티 모듈
/// Shared Utilities Module
///
/// 역할:
/// - 시간 소스 (Clock)
pub mod clock;

pub use clock::*;

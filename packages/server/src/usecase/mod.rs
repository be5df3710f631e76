//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod generate_uuid;
pub mod list_requests;

pub use error::{GenerateUuidError, ListRequestsError};
pub use generate_uuid::{GenerateUuidUseCase, GeneratedUuid};
pub use list_requests::ListRequestsUseCase;

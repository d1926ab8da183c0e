use std::convert::Infallible;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

/// JSON 요청 본문 추출기
/// JSON body extractor that never rejects on its own
///
/// 본문이 없거나, Content-Type이 틀리거나, 해석할 수 없거나, 필드 타입이 맞지 않으면
/// 빈 요청(`T::default()`)으로 취급합니다. 필수 필드 검증은 서비스 계층이 담당하므로
/// 이런 요청도 `AuthError::Validation` → 400 `{"error": ...}` 로 응답됩니다.
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(
                    status = %rejection.status(),
                    reason = %rejection.body_text(),
                    "unusable request body, treating it as empty"
                );
                Ok(Self(T::default()))
            }
        }
    }
}

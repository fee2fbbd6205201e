use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::Result;

/// Итог `safe_json`: разобранное тело или исходный ответ без изменений
#[derive(Debug)]
pub enum SafeJson<T> {
    Parsed(T),
    Passthrough(Response),
}

impl<T> SafeJson<T> {
    pub fn parsed(self) -> Option<T> {
        match self {
            SafeJson::Parsed(v) => Some(v),
            SafeJson::Passthrough(_) => None,
        }
    }
}

/// Разбирает тело как JSON только при статусе 200.
/// Иначе логирует статус и возвращает ответ как есть.
pub async fn safe_json<T: DeserializeOwned>(response: Response) -> Result<SafeJson<T>> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(SafeJson::Parsed(response.json::<T>().await?));
    }
    warn!(
        status = status.as_u16(),
        status_text = status.canonical_reason().unwrap_or(""),
        url = %response.url(),
        "response is not 200, skipping json decode"
    );
    Ok(SafeJson::Passthrough(response))
}

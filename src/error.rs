use thiserror::Error;

/// Ошибки ядра — решетки мест.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Попытка обратиться к месту, которого нет в зале.
    #[error("место {0} не найдено в зале")]
    UnknownSeatId(String),
    /// Идентификатор из данных занятости не соответствует ни одному месту.
    #[error("некорректный идентификатор занятого места: {0}")]
    InvalidOccupancyId(String),
}

/// Ошибки обращений к кассе.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("ошибка запроса к кассе: {0}")]
    Http(#[from] reqwest::Error),
    #[error("касса вернула статус HTTP {0}")]
    Status(u16),
}

/// Ошибки сеанса выбора мест.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("требуется вход в систему")]
    Unauthenticated,
    #[error("не выбрано ни одного места")]
    EmptySelection,
    #[error("не удалось оформить покупку: {0}")]
    Purchase(#[from] ApiError),
}

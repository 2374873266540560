//! box_office.rs
//!
//! Клиент API кассы. Ровно два вызова:
//! 1.  **Источник занятости**: `GET /api/occupied-seats` возвращает список
//!     идентификаторов занятых мест.
//! 2.  **Приемник покупок**: `POST /api/purchase` принимает фильм, кинотеатр
//!     и выбранные места.
//!
//! Запросы выполняются с явным таймаутом; отмена — через сброс future
//! (вызывающая сторона решает, когда прервать загрузку). Повторов нет.

use base64::{engine::general_purpose, Engine as _};
use tokio::time::Duration;
use tracing::{error, info};

use crate::config::{ApiConfig, AuthConfig};
use crate::error::ApiError;
use crate::models::PurchaseRequest;

/// Учетные данные для Basic-авторизации на кассе.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Собирает учетные данные из конфигурации, если заданы и логин, и пароль.
    pub fn from_config(config: &AuthConfig) -> Option<Self> {
        match (&config.email, &config.password) {
            (Some(email), Some(password)) => Some(Credentials {
                email: email.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }

    fn basic_header(&self) -> String {
        let encoded =
            general_purpose::STANDARD.encode(format!("{}:{}", self.email, self.password));
        format!("Basic {}", encoded)
    }
}

/// Клиент для взаимодействия с API кассы.
#[derive(Debug, Clone)]
pub struct BoxOfficeClient {
    /// Базовый URL кассы.
    base_url: String,
    /// Асинхронный HTTP-клиент.
    http_client: reqwest::Client,
    /// Учетные данные; `None` — неавторизованная сессия.
    credentials: Option<Credentials>,
}

impl BoxOfficeClient {
    /// Создает и конфигурирует клиент на основе настроек приложения.
    pub fn from_config(config: &ApiConfig, credentials: Option<Credentials>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_seconds))
                .build()
                .expect("Failed to create HTTP client"),
            credentials,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some(credentials) => request.header(
                reqwest::header::AUTHORIZATION,
                credentials.basic_header(),
            ),
            None => request,
        }
    }

    /// Загружает идентификаторы занятых мест.
    pub async fn fetch_occupied_seats(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/occupied-seats", self.base_url);
        info!("Fetching occupied seats from {}", url);

        let response = self.authorize(self.http_client.get(&url)).send().await?;

        if !response.status().is_success() {
            error!("Occupied seats request failed: HTTP {}", response.status());
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let occupied = response.json::<Vec<String>>().await?;
        info!("Loaded {} occupied seats", occupied.len());
        Ok(occupied)
    }

    /// Отправляет запрос на покупку выбранных мест.
    pub async fn purchase(&self, request: &PurchaseRequest) -> Result<(), ApiError> {
        let url = format!("{}/api/purchase", self.base_url);
        info!(
            "Submitting purchase: movie={}, seats={}",
            request.movie_name,
            request.seats.len()
        );

        let response = self
            .authorize(self.http_client.post(&url))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            error!("Purchase request failed: HTTP {}", response.status());
            return Err(ApiError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}

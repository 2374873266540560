use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub show: ShowConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
    // Ширина области просмотра, по ней подбирается размер места
    pub viewport_width: u32,
}

// Настройки API кассы
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

// Учетные данные пользователя (без них страница выбора мест недоступна)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub email: Option<String>,
    pub password: Option<String>,
}

// Сеанс: фильм и кинотеатр, попадают в запрос на покупку
#[derive(Debug, Clone, Deserialize)]
pub struct ShowConfig {
    pub movie_name: String,
    pub cinema: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_selection=debug".to_string()),
                viewport_width: env::var("VIEWPORT_WIDTH")
                    .unwrap_or_else(|_| "1024".to_string())
                    .parse()
                    .expect("VIEWPORT_WIDTH must be a valid number"),
            },
            api: ApiConfig {
                base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:8000".to_string()),
                timeout_seconds: env::var("API_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .expect("API_TIMEOUT_SECONDS must be a valid number"),
            },
            auth: AuthConfig {
                email: env::var("API_EMAIL").ok(),
                password: env::var("API_PASSWORD").ok(),
            },
            show: ShowConfig {
                movie_name: env::var("MOVIE_NAME")
                    .unwrap_or_else(|_| "Фильм не указан".to_string()),
                cinema: env::var("CINEMA")
                    .unwrap_or_else(|_| "Кинотеатр не указан".to_string()),
            },
        }
    }
}

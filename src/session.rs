//! session.rs
//!
//! Сеанс выбора мест: явный объект состояния, которым владеет слой
//! отображения. Все изменения решетки идут через методы сеанса, само
//! состояние ни к какому фреймворку отображения не привязано.

use tracing::{error, info, warn};

use crate::config::ShowConfig;
use crate::error::{GridError, SessionError};
use crate::grid::SeatGrid;
use crate::models::{PurchaseRequest, Seat, SeatStatus};
use crate::services::BoxOfficeClient;

/// Итог загрузки занятости.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Занятость получена с кассы.
    Loaded { occupied: usize },
    /// Касса недоступна или прислала битые данные. Зал показан полностью
    /// свободным, сообщение предназначено пользователю.
    Fallback { message: String },
}

#[derive(Debug)]
pub struct SeatSelectionSession {
    grid: SeatGrid,
    client: BoxOfficeClient,
    show: ShowConfig,
}

impl SeatSelectionSession {
    /// Открывает сеанс выбора мест. Неавторизованные сессии до выбора мест
    /// не допускаются.
    pub fn start(client: BoxOfficeClient, show: ShowConfig) -> Result<Self, SessionError> {
        if !client.is_authenticated() {
            return Err(SessionError::Unauthenticated);
        }

        Ok(Self {
            grid: SeatGrid::all_available(),
            client,
            show,
        })
    }

    /// Загружает занятость и строит решетку заново. Предыдущий выбор
    /// сбрасывается — загрузка всегда полный сброс.
    ///
    /// При сбое транспорта или битых данных зал остается рабочим: все места
    /// показываются свободными, пользователю возвращается сообщение.
    pub async fn load_seats(&mut self) -> LoadOutcome {
        match self.client.fetch_occupied_seats().await {
            Ok(occupied_ids) => match self.grid.reset(&occupied_ids) {
                Ok(()) => {
                    info!("Seat map loaded: {} occupied", occupied_ids.len());
                    LoadOutcome::Loaded {
                        occupied: occupied_ids.len(),
                    }
                }
                Err(e) => {
                    warn!("Occupancy data rejected: {}", e);
                    self.fallback()
                }
            },
            Err(e) => {
                warn!("Failed to fetch occupied seats: {}", e);
                self.fallback()
            }
        }
    }

    fn fallback(&mut self) -> LoadOutcome {
        self.grid = SeatGrid::all_available();
        LoadOutcome::Fallback {
            message: "Не удалось загрузить занятые места".to_string(),
        }
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn show(&self) -> &ShowConfig {
        &self.show
    }

    /// Переключает место, см. [`SeatGrid::toggle`].
    pub fn toggle(&mut self, seat_id: &str) -> Result<SeatStatus, GridError> {
        self.grid.toggle(seat_id)
    }

    /// Выбранные места в порядке выбора.
    pub fn selected_seats(&self) -> Vec<&Seat> {
        self.grid.selected_seats()
    }

    /// Оформляет покупку выбранных мест.
    ///
    /// Пустой выбор отклоняется сразу. При сбое кассы состояние сеанса не
    /// меняется — пользователь остается на странице и может повторить.
    /// Успех возвращает купленные места, дальше вызывающая сторона уходит
    /// со страницы выбора.
    pub async fn buy_tickets(&self) -> Result<Vec<Seat>, SessionError> {
        let seats: Vec<Seat> = self
            .grid
            .selected_seats()
            .into_iter()
            .cloned()
            .collect();

        if seats.is_empty() {
            return Err(SessionError::EmptySelection);
        }

        let request = PurchaseRequest {
            movie_name: self.show.movie_name.clone(),
            cinema: self.show.cinema.clone(),
            seats,
        };

        match self.client.purchase(&request).await {
            Ok(()) => {
                info!("Purchase completed: {} seats", request.seats.len());
                Ok(request.seats)
            }
            Err(e) => {
                error!("Error purchasing tickets: {}", e);
                Err(SessionError::Purchase(e))
            }
        }
    }
}

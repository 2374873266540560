use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_selection::{
    config::Config,
    display,
    services::{BoxOfficeClient, Credentials},
    session::{LoadOutcome, SeatSelectionSession},
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting seat selection client");

    let credentials = Credentials::from_config(&config.auth);
    let client = BoxOfficeClient::from_config(&config.api, credentials);

    // Гард авторизации: без учетных данных страница выбора мест недоступна
    let mut session = match SeatSelectionSession::start(client, config.show.clone()) {
        Ok(session) => session,
        Err(e) => {
            error!("Session rejected: {}", e);
            eprintln!("Войдите в систему, чтобы выбрать места (API_EMAIL / API_PASSWORD)");
            std::process::exit(1);
        }
    };

    // Загрузка занятости; Ctrl-C во время загрузки прерывает запрос
    let outcome = tokio::select! {
        outcome = session.load_seats() => outcome,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted while loading seats, shutting down");
            return;
        }
    };

    let seat_size = display::seat_size_for_width(config.app.viewport_width);
    println!("{} — {}", session.show().movie_name, session.show().cinema);
    if let LoadOutcome::Fallback { message } = &outcome {
        println!("{}", message);
    }
    render(&session, seat_size);
    println!("Команды: <ряд>-<место> | buy | reload | quit");

    run_loop(&mut session, seat_size).await;

    info!("Seat selection client stopped");
}

fn render(session: &SeatSelectionSession, seat_size: u32) {
    print!("{}", display::render_grid(session.grid(), seat_size));
    println!("{}", display::render_legend());
    println!("{}", display::render_selection(&session.selected_seats()));
}

async fn run_loop(session: &mut SeatSelectionSession, seat_size: u32) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, shutting down");
                return;
            }
        };

        let command = match line {
            Ok(Some(command)) => command.trim().to_string(),
            Ok(None) => return, // конец ввода
            Err(e) => {
                error!("Failed to read command: {}", e);
                return;
            }
        };

        match command.as_str() {
            "" => {}
            "quit" | "q" => return,
            "buy" => match session.buy_tickets().await {
                Ok(seats) => {
                    // успех — уходим со страницы выбора
                    println!("Покупка оформлена: {} мест(а)", seats.len());
                    return;
                }
                Err(e) => println!("{}", e),
            },
            "reload" => {
                if let LoadOutcome::Fallback { message } = session.load_seats().await {
                    println!("{}", message);
                }
                render(session, seat_size);
            }
            seat_id => match session.toggle(seat_id) {
                Ok(_) => render(session, seat_size),
                Err(e) => println!("{}", e),
            },
        }
    }
}

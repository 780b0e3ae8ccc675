use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use citycast_core::AppError;
use citycast_session::{render_session, FileStore, WeatherSession};
use citycast_weather::WeatherProvider;

mod command;

use command::{resolve_saved, Command, HELP};

fn main() -> Result<()> {
    // Initialize core
    citycast_core::init()?;

    let mut app = match citycast_core::App::new() {
        Ok(app) => app,
        Err(e) => {
            let err = AppError::classify(e);
            report(&err);
            return Err(err.into());
        }
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("citycast-tokio")
        .build()
        .context("Failed to create tokio runtime")?;

    let provider = WeatherProvider::new(&app.config().weather)
        .map_err(AppError::from)
        .context("Failed to create weather provider")?;
    let store = Arc::new(FileStore::open(app.storage_path()));
    tracing::info!("Using store at {}", store.path().display());

    let mut session = WeatherSession::new(Arc::new(provider), store, runtime.handle().clone());

    tracing::info!("CityCast started");
    println!("CityCast - type a city name, or 'help'");

    if session.on_startup().is_some() {
        runtime.block_on(session.wait_until_idle());
    }
    print!("{}", render_session(&session));

    let stdin = io::stdin();
    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match Command::parse(&line) {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Invalid(usage) => {
                println!("{usage}");
                continue;
            }
            Command::List => {}
            Command::Search(city) => {
                session.set_search_input(city);
                if session.submit_search().is_some() {
                    print!("{}", render_session(&session));
                    runtime.block_on(session.wait_until_idle());
                }
            }
            Command::Open(target) => {
                let city = resolve_saved(&target, session.favorites().names()).map(str::to_string);
                match city {
                    Some(city) => {
                        session.select_favorite(&city);
                        runtime.block_on(session.wait_until_idle());
                    }
                    None => println!("No saved city matches {target}"),
                }
            }
            Command::Save => match session.save_current_city() {
                Ok(true) => {}
                Ok(false) => println!("Nothing to save"),
                Err(e) => report(&e.into()),
            },
            Command::Remove(city) => match session.remove_city(&city) {
                Ok(true) => {}
                Ok(false) => println!("{city} is not saved"),
                Err(e) => report(&e.into()),
            },
        }

        print!("{}", render_session(&session));
    }

    // Graceful shutdown
    app.shutdown()?;

    Ok(())
}

fn report(err: &AppError) {
    tracing::error!("{}", err);
    println!("{}", err.user_message());
}

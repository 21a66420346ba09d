use std::{path::PathBuf, process::ExitCode, sync::Arc};

use clap::{Parser, Subcommand};
use club_booking::{
    adapters::{clock::SystemClock, storage::json::JsonFileStore},
    commands::{
        book::BookRequest,
        club_points::ClubPointsRequest,
        execute,
        purchase_places::{PurchasePlacesRequest, BOOKING_COMPLETE_MESSAGE},
        show_summary::ShowSummaryRequest,
        DomainLogic, Error,
    },
};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Book competition places for a club using its points
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the clubs JSON document
    #[arg(long, env = "CLUBS_PATH", default_value = "clubs.json")]
    clubs: PathBuf,

    /// Path to the competitions JSON document
    #[arg(long, env = "COMPETITIONS_PATH", default_value = "competitions.json")]
    competitions: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a club and the competitions, looking the club up by email
    Summary {
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Show a competition and how many places the club may still book
    Book {
        #[arg(long)]
        club: String,
        #[arg(long)]
        competition: String,
    },
    /// List the points of every club
    Points,
    /// Spend points to book places in a competition
    Purchase {
        #[arg(long)]
        club: String,
        #[arg(long)]
        competition: String,
        #[arg(long)]
        places: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let store = Arc::new(JsonFileStore::new(args.clubs, args.competitions));
    let mut domain = DomainLogic::new(store.clone(), store, Arc::new(SystemClock));

    match run(&mut domain, args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(
    domain: &mut DomainLogic<JsonFileStore, JsonFileStore, SystemClock>,
    command: Command,
) -> Result<(), Error> {
    match command {
        Command::Summary { email } => {
            let res = execute(domain, ShowSummaryRequest { email }).await?;
            println!("Welcome, {}", res.club.email);
            println!("Points available: {}", res.club.points);
            for competition in res.competitions {
                println!(
                    "{} ({}) - places: {}",
                    competition.name, competition.date, competition.number_of_places
                );
            }
        }
        Command::Book { club, competition } => {
            let res = execute(domain, BookRequest { competition, club }).await?;
            println!("{} ({})", res.competition.name, res.competition.date);
            println!("Places available: {}", res.competition.number_of_places);
            println!("Points available: {}", res.club.points);
            println!("You may book up to {} more place(s)", res.remaining_places);
        }
        Command::Points => {
            let res = execute(domain, ClubPointsRequest).await?;
            for club in res.clubs {
                println!("{}: {}", club.name, club.points);
            }
        }
        Command::Purchase {
            club,
            competition,
            places,
        } => {
            let req = PurchasePlacesRequest {
                competition,
                club,
                places,
            };
            let res = execute(domain, req).await?;
            println!("{BOOKING_COMPLETE_MESSAGE}");
            println!("{}", res.confirmation());
            println!("Points available: {}", res.club.points);
        }
    }

    Ok(())
}

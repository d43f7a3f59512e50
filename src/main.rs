#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::Rng;
#[cfg(feature = "std")]
use seabattle::{
    init_logging, run_match, ChannelId, ConsolePresenter, PlayerId, RandomDriver, SessionId,
    SessionService,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Run a full two-player match on the local machine, boards printed to
    /// the console.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed } => {
            let (seed1, seed2) = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (game will be reproducible)", s);
                    (s, s.wrapping_add(1))
                }
                None => {
                    let mut rng = rand::rng();
                    (rng.random(), rng.random())
                }
            };

            let (service, handle) = SessionService::new(ConsolePresenter);
            let server = tokio::spawn(service.run());

            let session = SessionId(1);
            let (one, two) = (PlayerId(1), PlayerId(2));
            handle.open(session, ChannelId(1), one, two).await?;

            let summary = run_match(
                &handle,
                session,
                RandomDriver::new(one, seed1),
                RandomDriver::new(two, seed2),
            )
            .await?;
            println!(
                "{} defeats {} after {} shots",
                summary.winner, summary.loser, summary.shots
            );

            drop(handle);
            server.await??;
        }
    }

    Ok(())
}

use seabattle::{
    run_match, ChannelId, NullPresenter, PlayerId, RandomDriver, SessionId, SessionService,
};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let (service, handle) = SessionService::new(NullPresenter);
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

    drop(handle);
    server.await??;

    let result = json!({
        "winner": summary.winner,
        "loser": summary.loser,
        "shots": summary.shots,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

use clap::Parser;
use reelquiz::{client, telemetry, QuizApi};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the quiz backend
    #[arg(short, long, default_value = "http://localhost:8080")]
    server: String,

    /// Content id to fetch the question batch for
    #[arg(short, long)]
    contents_id: i64,
}

#[tokio::main]
async fn main() {
    telemetry::init();
    let args = Args::parse();

    let api = QuizApi::new(args.server);
    if let Err(e) = client::run(&api, args.contents_id).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

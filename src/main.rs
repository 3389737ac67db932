#[tokio::main]
async fn main() {
    if let Err(err) = valuation_ai::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

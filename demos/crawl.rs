//! Download one month's payroll PDFs from the live TJPB portal.
//!
//! Usage: cargo run --example crawl -- <month> <year>

use tjpb_dl::{Config, Crawler};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let month: u32 = args.next().as_deref().unwrap_or("1").parse()?;
    let year: i32 = args.next().as_deref().unwrap_or("2013").parse()?;

    let crawler = Crawler::new(Config::default())?;
    match crawler.crawl(month, year).await {
        Ok(paths) => {
            for path in paths {
                println!("saved {}", path.display());
            }
        }
        Err(err) => {
            eprintln!("crawl failed: {err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

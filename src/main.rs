use anyhow::Result;
use clap::Parser;
use escape_snake::app::App;
use escape_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "escape-snake")]
#[command(version, about = "Grid snake arcade game - don't cross the border")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width as usize, cli.height as usize);

    let mut app = App::new(config);
    app.run().await
}

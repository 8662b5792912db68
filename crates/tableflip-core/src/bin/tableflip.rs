//! tableflip CLI
//!
//! Renders a flip/unflip command locally, e.g. `tableflip flip -rage -table`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tableflip_core::{route, SlackResponse};

#[derive(Parser, Debug)]
#[command(name = "tableflip", version, about = "Flip tables and phrases")]
struct Cli {
    /// User id used in the mention attachment
    #[arg(long, default_value = "local")]
    user: String,

    /// Print the full Slack response as JSON
    #[arg(long)]
    json: bool,

    /// Command word and its arguments, e.g. `flip -table`
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let response: SlackResponse = route(&cli.command.join(" "), &cli.user);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else if response.is_ephemeral() {
        eprintln!("{}", response.text);
        for attachment in &response.attachments {
            eprintln!("{}", attachment.text);
        }
        std::process::exit(2);
    } else {
        println!("{}", response.text);
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "items-cli")]
#[command(about = "Command-line client for the item store service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all items
    List,
    /// Create an item from a JSON object, e.g. '{"name":"a"}'
    Create { fields: String },
    /// Merge a JSON object into an existing item
    Update { id: String, fields: String },
    /// Delete an item
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::List => {
            let res = client.get(format!("{}/items", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Create { fields } => {
            let body = parse_fields(&fields)?;
            let res = client
                .post(format!("{}/items", base))
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Update { id, fields } => {
            let body = parse_fields(&fields)?;
            let res = client
                .put(format!("{}/items/{}", base, id))
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Delete { id } => {
            let res = client.delete(format!("{}/items/{}", base, id)).send().await?;
            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: service returned status {}", status);
            } else {
                println!("Deleted {}", id);
            }
        }
    }

    Ok(())
}

/// Check the argument is JSON before sending it, keeping the original text.
fn parse_fields(raw: &str) -> Result<String, Box<dyn std::error::Error>> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(_) | Value::Array(_) => Ok(raw.to_string()),
        _ => Err("fields must be a JSON object".into()),
    }
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use fracdraw_domain::CATALOG;
use fracdraw_requests::parse_requests;
use fs_err as fs;
use std::process::Command as ProcessCommand;

const FIXTURES_DIR: &str = "tests/fixtures";

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the pattern catalog as JSON.
    PrintCatalog,
    /// Create a golden fixture directory with a request file (run bless-fixtures next).
    NewFixture {
        /// Fixture directory name under tests/fixtures.
        name: String,
        /// Request lines, e.g. `1,2 3,1`.
        #[arg(required = true)]
        requests: Vec<String>,
    },
    /// Bless golden fixtures (overwrite expected outputs).
    BlessFixtures,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintCatalog => {
            println!("{}", serde_json::to_string_pretty(&CATALOG)?);
        }
        Command::NewFixture { name, requests } => {
            let mut contents = requests.join("\n");
            contents.push('\n');
            parse_requests(&contents).context("fixture requests are not valid")?;

            let dir = Utf8PathBuf::from(FIXTURES_DIR).join(&name);
            if dir.exists() {
                anyhow::bail!("fixture {dir} already exists");
            }
            fs::create_dir_all(&dir).with_context(|| format!("create {dir}"))?;
            fs::write(dir.join("requests.csv"), contents)?;
            println!("created {dir}/requests.csv");
        }
        Command::BlessFixtures => {
            let status = ProcessCommand::new("cargo")
                .args(["test", "-p", "fracdraw-core", "--test", "golden_fixtures"])
                .env("FRACDRAW_BLESS", "1")
                .status()
                .context("run golden fixture blessing")?;
            if !status.success() {
                anyhow::bail!("bless-fixtures failed");
            }
        }
    }
    Ok(())
}

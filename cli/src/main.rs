//! `freelancer` — run a project or job search and print the `result` JSON.
//!
//! Logs and the token prompt go to stderr (`RUST_LOG`, default `warn`);
//! stdout carries only the result, or `null` when the response had none.

mod args;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use freelancer_core::{FreelancerClient, TransportConfig, UreqTransport};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use args::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli, io::stdin().lock(), io::stderr(), io::stdout().lock())
}

/// Run one search. The prompt, when needed, is written to `prompt`; only
/// the result JSON goes to `output`.
fn run(cli: Cli, input: impl BufRead, prompt: impl Write, output: impl Write) -> Result<()> {
    let token = match cli.token {
        Some(token) => token,
        None => prompt_token(input, prompt).context("failed to read auth token")?,
    };

    let client = FreelancerClient::with_base_url(token, &cli.base_url);
    let transport = UreqTransport::new(TransportConfig {
        timeout: (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs)),
        ..Default::default()
    });

    let result = match cli.command {
        Command::Projects(args) => client
            .search_projects(&transport, &args.into())
            .context("project search failed")?,
        Command::Jobs(args) => client
            .search_jobs(&transport, &args.into())
            .context("job search failed")?,
    };

    write_result(output, &result)
}

fn write_result(mut output: impl Write, result: &Option<Value>) -> Result<()> {
    serde_json::to_writer_pretty(&mut output, result)?;
    writeln!(output)?;
    Ok(())
}

/// Ask for the token interactively. Only the line terminator is stripped.
fn prompt_token(mut input: impl BufRead, mut output: impl Write) -> Result<String> {
    write!(output, "Enter your auth token: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("stdin closed before a token was entered");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_reads_one_line() {
        let mut shown = Vec::new();
        let token = prompt_token("abc.def \n next line\n".as_bytes(), &mut shown).unwrap();
        assert_eq!(token, "abc.def ");
        assert_eq!(String::from_utf8(shown).unwrap(), "Enter your auth token: ");
    }

    #[test]
    fn prompt_strips_crlf() {
        let token = prompt_token("tok\r\n".as_bytes(), Vec::new()).unwrap();
        assert_eq!(token, "tok");
    }

    fn start_mock_server() -> String {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener, mock_server::RequestLog::default()).await
            })
            .unwrap();
        });

        format!("http://{addr}")
    }

    #[test]
    fn prompted_token_keeps_stdout_pure_json() {
        let base_url = start_mock_server();
        let cli = Cli::try_parse_from([
            "freelancer",
            "--base-url",
            base_url.as_str(),
            "jobs",
            "--job-name",
            "php",
        ])
        .unwrap();
        assert!(cli.token.is_none(), "FREELANCER_OAUTH_TOKEN must be unset for this test");

        let mut prompt = Vec::new();
        let mut stdout = Vec::new();
        run(cli, "tok\n".as_bytes(), &mut prompt, &mut stdout).unwrap();

        assert_eq!(String::from_utf8(prompt).unwrap(), "Enter your auth token: ");
        let printed = String::from_utf8(stdout).unwrap();
        let parsed: Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(parsed[0]["name"], "PHP");
    }

    #[test]
    fn token_flag_skips_the_prompt() {
        let base_url = start_mock_server();
        let cli = Cli::try_parse_from([
            "freelancer",
            "--token",
            "tok",
            "--base-url",
            base_url.as_str(),
            "projects",
            "--query",
            "django",
        ])
        .unwrap();

        let mut prompt = Vec::new();
        let mut stdout = Vec::new();
        run(cli, "".as_bytes(), &mut prompt, &mut stdout).unwrap();

        assert!(prompt.is_empty());
        let parsed: Value = serde_json::from_slice(&stdout).unwrap();
        assert_eq!(parsed["total_count"], 1);
    }

    #[test]
    fn absent_result_prints_null() {
        let mut stdout = Vec::new();
        write_result(&mut stdout, &None).unwrap();
        assert_eq!(String::from_utf8(stdout).unwrap(), "null\n");
    }

    #[test]
    fn prompt_fails_on_eof() {
        assert!(prompt_token("".as_bytes(), Vec::new()).is_err());
    }
}

use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use services::layout::LayoutError;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = commands::handle_commands(&cli) {
        report_failure(cli.json, &err);
        std::process::exit(1);
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<LayoutError>().is_some() {
        "UNSUPPORTED_LAYOUT"
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        "IO"
    } else {
        "ERROR"
    }
}

fn report_failure(json: bool, err: &anyhow::Error) {
    if json {
        let payload = serde_json::json!({
            "ok": false,
            "error": {
                "code": error_code(err),
                "message": format!("{:#}", err),
            }
        });
        println!("{}", payload);
    } else {
        eprintln!("error: {:#}", err);
    }
}

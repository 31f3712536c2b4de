use crate::domain::models::JsonOut;
use serde::Serialize;
use std::fmt::Display;

/// Print a single report: its row form on stdout, or a pretty-printed
/// `{ "ok": true, "data": ... }` envelope when `--json` is set.
pub fn print_one<T: Serialize + Display>(json: bool, data: T) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", data);
    }
    Ok(())
}

/// Print a batch of reports, one row per line, or the whole batch as a
/// single JSON envelope when `--json` is set.
pub fn print_out<T: Serialize + Display>(json: bool, data: &[T]) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", d);
        }
    }
    Ok(())
}

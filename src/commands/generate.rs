use crate::cli::{Cli, Commands};
use crate::domain::models::{GenerateOutcome, GenerateReport, InspectReport, Module};
use crate::services::generate::{generate_all, generate_module_map};
use crate::services::output::{print_one, print_out};
use crate::services::{layout, scan};

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate { name, path } => {
            let module = Module::new(name.clone(), path.clone());
            let outcome = generate_module_map(&module)?;
            let report = report_for(&module, outcome);
            print_one(cli.json, report)?;
        }
        Commands::GenerateAll { sources } => {
            let results = generate_all(sources)?;
            let reports: Vec<GenerateReport> =
                results.iter().map(|(m, o)| report_for(m, *o)).collect();
            print_out(cli.json, &reports)?;
        }
        Commands::Inspect { name, path } => {
            let listing = scan::list_include_dir(path)?;
            let layout = layout::classify(name, &listing.headers, &listing.dirs)?;
            let report = InspectReport {
                module: name.clone(),
                layout: layout.as_str().to_string(),
                umbrella: layout.umbrella_locator(name),
            };
            print_one(cli.json, report)?;
        }
    }
    Ok(())
}

fn report_for(module: &Module, outcome: GenerateOutcome) -> GenerateReport {
    let (status, layout) = match outcome {
        GenerateOutcome::AlreadyPresent => ("already_present", None),
        GenerateOutcome::EmptyPlaceholder => ("placeholder", None),
        GenerateOutcome::Written(layout) => ("generated", Some(layout.as_str().to_string())),
    };
    GenerateReport {
        module: module.name.clone(),
        status: status.to_string(),
        layout,
        module_map: module.module_map_path().to_string_lossy().to_string(),
    }
}

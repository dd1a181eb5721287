//! Codegen: Unique Code Generator CLI
//!
//! Asks for the code parameters, generates a set of distinct random codes
//! and saves them as a CSV file in `generated_codes/`.

use std::io::{self, IsTerminal};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use codegen::cli::{ask_open_directory, collect_request, Cli, LinePrompter, Prompter, TerminalPrompter};
use codegen::pipeline::{default_file_name, CodeGenerator, CodeWriter};
use codegen::report::RunSummary;
use codegen::utils::{
    create_code_progress, create_spinner, init_logging, platform_revealer, print_banner,
    print_completion, print_info, print_success, print_warning, RevealOutcome,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.plain {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    init_logging(cli.verbose);

    // Computed once so the prompt and the saved file agree
    let default_name = default_file_name(Local::now().naive_local());

    print_banner(env!("CARGO_PKG_VERSION"));

    let mut prompter: Box<dyn Prompter> = if io::stdin().is_terminal() && console::user_attended() {
        Box::new(TerminalPrompter::new())
    } else {
        Box::new(LinePrompter::stdio())
    };

    let request = collect_request(prompter.as_mut(), &default_name)?;
    tracing::info!(
        count = request.code_count,
        length = request.code_length,
        pool = request.pool.len(),
        encoding = %request.encoding,
        "generation request collected"
    );

    // Generate
    println!();
    let generator = CodeGenerator::new(request.pool.clone(), request.code_length)
        .with_max_attempts(cli.max_attempts);
    generator.check_feasible(request.code_count)?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let progress = create_code_progress(request.code_count as u64);
    let start = Instant::now();
    let codes = generator.generate(request.code_count, &mut rng, &progress)?;
    let generation_time = start.elapsed();
    print_success("Codes generated.");

    // Save
    let writer = CodeWriter::new(&cli.output_dir);
    let spinner = create_spinner("Writing codes...");
    let saved = writer.save(&codes, &request.output_file_name, request.encoding);
    spinner.finish_and_clear();
    let output_path = saved
        .with_context(|| format!("Failed to save codes to {}", request.output_file_name))?;
    print_success(&format!("Codes saved to file {}.", request.output_file_name));

    RunSummary::new(&request, codes.len(), output_path, generation_time).display();

    if !ask_open_directory(prompter.as_mut())? {
        return Ok(());
    }

    match platform_revealer().reveal(writer.directory()) {
        Ok(RevealOutcome::Launched) => {
            print_info(&format!("Opened {}", writer.directory().display()));
        }
        Ok(RevealOutcome::Unsupported) => {
            print_info("Operating system not supported for automatic directory opening.");
        }
        Err(err) => print_warning(&format!("Could not open the folder: {:#}", err)),
    }

    print_completion();
    Ok(())
}

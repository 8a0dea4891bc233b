use clap::Parser;

use linkfmt::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = linkfmt::init_logging(&cli.log_level).and_then(|()| linkfmt::run(cli));
    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn main() {

    // 1. Parse commandline arguments and set up logging
    let cli = wlzvtx::args::parse_cli_args();
    wlzvtx::logging::init_logging(wlzvtx::logging::LoggingConfig::from_verbosity(cli.verbose));

    // 2. Run the command
    if let Err(err) = wlzvtx::run(cli) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

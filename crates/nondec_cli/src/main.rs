fn main() -> anyhow::Result<()> {
    env_logger::init();
    nondec_cli::parse_cli()
}

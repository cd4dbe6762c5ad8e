fn main() -> anyhow::Result<()> {
    gcfromdna::cli::run::entry()
}

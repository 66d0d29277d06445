use clap::Parser;
use lastmile::app::LastMileCliArguments;

fn main() {
    env_logger::init();
    let args = LastMileCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running lastmile: {e}");
            std::process::exit(1);
        }
    }
}

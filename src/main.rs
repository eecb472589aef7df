use artesync::Cli;
use std::process;

fn main() {
    let args = Cli::parse_args();

    match artesync::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Error: {e}");
            }
            process::exit(1);
        }
    }
}

//! `hd` - support ticket desk backed by a single JSON file.

use helpdesk::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

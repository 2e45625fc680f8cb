//! ForgeSiteDiary main entrypoint.

use forgesitediary::run;
use forgesitediary::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

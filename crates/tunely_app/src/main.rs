mod platform;

fn main() {
    if let Err(err) = platform::run_app() {
        eprintln!("tunely: {err}");
        std::process::exit(1);
    }
}

fn main() {
    if let Err(err) = adscope::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

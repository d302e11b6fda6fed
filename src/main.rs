fn main() {
    if let Err(e) = dic_speciation::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn main() {
    if let Err(e) = lulex_drv::main() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

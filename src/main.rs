fn main() {
    viaja::app::cli::run();
}
